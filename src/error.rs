use std::num::ParseIntError;

use thiserror::Error;

/// Represents errors that can occur during snowflake operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnowflakeError {
    /// Error when textual input is not a decimal 64-bit unsigned integer
    #[error("\"{input}\" is not a valid snowflake: {source}")]
    Parse {
        input: String,
        #[source]
        source: ParseIntError,
    },
}

/// Result alias used throughout the crate
pub type Result<T, E = SnowflakeError> = std::result::Result<T, E>;
