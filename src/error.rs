//! Crate-level error taxonomy.
//!
//! Per-collection errors stay inside the clients. Every operation a screen can
//! trigger reports one of the four [`StoreError`] kinds, and the screen shows
//! [`StoreError::user_message`].

use thiserror::Error;

use crate::cart_actor::CartError;
use crate::category_actor::CategoryError;
use crate::identity::AuthError;
use crate::order_actor::OrderError;
use crate::order_item_actor::OrderItemError;
use crate::product_actor::ProductError;
use crate::user_actor::UserError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The caller's input was rejected; correcting it is enough.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A read or write against the store failed.
    #[error("Remote operation failed: {0}")]
    RemoteOperationError(String),

    /// The action needs a signed-in identity.
    #[error("Authentication required")]
    AuthenticationRequired,

    /// A step of order placement failed after validation passed.
    #[error("Order placement failed: {0}")]
    OrderPlacementError(String),
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        StoreError::ValidationError(msg.into())
    }

    /// Human-readable message for the screen that triggered the action.
    pub fn user_message(&self) -> String {
        match self {
            StoreError::ValidationError(msg) => match msg.as_str() {
                "address required" => "Please enter a shipping address".to_string(),
                "cart empty" => "Your cart is empty".to_string(),
                other => other.to_string(),
            },
            StoreError::RemoteOperationError(_) => "Something went wrong. Please try again.".to_string(),
            StoreError::AuthenticationRequired => "Please sign in to continue".to_string(),
            StoreError::OrderPlacementError(_) => "Failed to place order. Please try again.".to_string(),
        }
    }
}

macro_rules! remote_errors {
    ($($source:ty),* $(,)?) => {
        $(
            impl From<$source> for StoreError {
                fn from(e: $source) -> Self {
                    StoreError::RemoteOperationError(e.to_string())
                }
            }
        )*
    };
}

remote_errors!(CategoryError, ProductError, CartError, OrderError, OrderItemError, UserError);

impl From<AuthError> for StoreError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::User(UserError::InvalidEmail(_)) => StoreError::ValidationError(e.to_string()),
            AuthError::MissingFields
            | AuthError::PasswordTooShort(_)
            | AuthError::AlreadyRegistered
            | AuthError::InvalidCredentials => StoreError::ValidationError(e.to_string()),
            AuthError::Hashing(_) | AuthError::User(_) => StoreError::RemoteOperationError(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages() {
        assert_eq!(StoreError::validation("address required").user_message(), "Please enter a shipping address");
        assert_eq!(StoreError::validation("cart empty").user_message(), "Your cart is empty");
        assert_eq!(StoreError::validation("out of stock").user_message(), "out of stock");
        assert_eq!(
            StoreError::OrderPlacementError("order items: closed".into()).user_message(),
            "Failed to place order. Please try again."
        );
    }

    #[test]
    fn collection_errors_become_remote_errors() {
        let err: StoreError = CartError::ActorCommunicationError("Actor closed".into()).into();
        assert!(matches!(err, StoreError::RemoteOperationError(msg) if msg.contains("Actor closed")));
    }

    #[test]
    fn auth_rule_failures_are_validation_errors() {
        let err: StoreError = AuthError::PasswordTooShort(6).into();
        assert_eq!(err, StoreError::validation("Password must be at least 6 characters"));

        let err: StoreError = AuthError::User(UserError::ActorCommunicationError("gone".into())).into();
        assert!(matches!(err, StoreError::RemoteOperationError(_)));
    }
}
