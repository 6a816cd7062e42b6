use thiserror::Error;

/// Represents errors that can occur while evaluating cron expressions.
///
/// `CronError` is used throughout the `cronmatch` crate to indicate failures
/// and is exported for consuming programs to use.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CronError {
    /// The expression uses a feature that has no instant-matching meaning.
    ///
    /// This error includes the name of the feature, such as `@reboot`, which
    /// fires on system start rather than at any calendar instant.
    #[error("Unsupported feature: {0}")]
    UnsupportedFeature(String),

    /// A calendar step produced a date that cannot be represented.
    ///
    /// Raised by a calendar provider, for instance when shifting a timestamp
    /// past the range supported by the underlying date library.
    #[error("Calendar encountered an invalid date.")]
    InvalidDate,
}
