//! Configuration errors
//!
//! User input never produces an error type; failed field checks are collected
//! in a [`crate::ValidationReport`] instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse form config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("element id for {0} must not be empty")]
    EmptyId(&'static str),

    #[error("element id '{0}' is used more than once")]
    DuplicateId(String),

    #[error("{0} color must not be empty")]
    EmptyColor(&'static str),
}
