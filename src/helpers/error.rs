use thiserror::Error;

/// Failures of the few helpers that cannot degrade to a fallback value.
#[derive(Debug, Error)]
pub enum HelperError {
    #[error("cannot draw {count} unique values from 1..={max}")]
    SampleTooLarge { count: usize, max: usize },

    #[error("unknown pattern flag: {0}")]
    UnknownFlag(char),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}
