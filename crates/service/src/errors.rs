use std::fmt::Display;

use thiserror::Error;

/// Raised only for caller programming errors; an out-of-range current page is clamped instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl PaginationError {
    pub fn page_size(raw: impl Display) -> Self {
        Self::InvalidArgument(format!("page_size must be >= 1, got {raw}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepsError {
    #[error("unknown step status: {0}")]
    UnknownStatus(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_message_names_the_value() {
        let err = PaginationError::page_size(0);
        assert_eq!(err.to_string(), "invalid argument: page_size must be >= 1, got 0");
    }

    #[test]
    fn unknown_status_message_names_the_value() {
        let err = StepsError::UnknownStatus("done".into());
        assert_eq!(err.to_string(), "unknown step status: done");
    }
}
