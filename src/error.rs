/*
 * Error Module
 *
 * Startup failures for the flocking simulation. Everything that can go wrong
 * happens before the first tick; once the loop runs there are no recoverable
 * errors left.
 */

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FlockError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlockError {
    #[error("unknown simulation profile `{0}` (expected `force` or `positional`)")]
    UnknownProfile(String),

    #[error("invalid seed `{value}`: {reason}")]
    InvalidSeed { value: String, reason: String },

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("failed to create display surface: {0}")]
    Surface(String),
}
