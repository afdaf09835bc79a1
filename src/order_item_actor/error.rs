//! Error types for the OrderItem actor.

use thiserror::Error;

/// Errors that can occur during order line operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderItemError {
    /// The order line data provided is invalid.
    #[error("Order item validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderItemError {
    fn from(msg: String) -> Self {
        OrderItemError::ActorCommunicationError(msg)
    }
}
