//! Contact delivery errors

use thiserror::Error;

/// Failure reported by a contact sender
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    /// The receiving side refused the message
    #[error("message rejected: {0}")]
    Rejected(String),
    /// The message never reached the receiving side
    #[error("transport failure: {0}")]
    Transport(String),
}
