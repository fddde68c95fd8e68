//! Error types shared by the catalog collections (`restaurant` and `listFood`).

use collection_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur while browsing restaurants and menus.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested restaurant or dish does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The catalog data provided is invalid.
    #[error("Catalog validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CatalogError {
    fn from(e: FrameworkError) -> Self {
        if let Some(inner) = e.entity_error::<CatalogError>() {
            return inner.clone();
        }
        match e {
            FrameworkError::NotFound(id) => CatalogError::NotFound(id),
            other => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}
