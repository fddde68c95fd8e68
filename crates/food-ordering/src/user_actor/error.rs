//! Error types for the User collection.

use collection_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// No account matches the username and password.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// A seller account is not attached to any restaurant.
    #[error("Seller {0} has no restaurant")]
    MissingRestaurant(String),

    /// The user data provided is invalid.
    #[error("User validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for UserError {
    fn from(e: FrameworkError) -> Self {
        match e.entity_error::<UserError>() {
            Some(inner) => inner.clone(),
            None => UserError::ActorCommunicationError(e.to_string()),
        }
    }
}
