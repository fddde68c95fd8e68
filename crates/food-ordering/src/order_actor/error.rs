//! Error types for the Order and Sequence collections.

use crate::model::RestId;
use collection_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order line was already picked up or never existed.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// Staff of another restaurant tried to advance the line.
    #[error("Order line belongs to restaurant {owner}, not {requested}")]
    WrongRestaurant { owner: RestId, requested: RestId },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        if let Some(inner) = e.entity_error::<OrderError>() {
            return inner.clone();
        }
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
