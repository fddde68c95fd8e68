//! # Application Errors
//!
//! [`AppError`] is what the app-level operations (login, catalog, cart, checkout, staff desk)
//! return. Collection errors convert into it with `?`.
//!
//! Nothing here is fatal: callers log the error and show [`AppError::notice`].

use crate::config::ConfigError;
use crate::model::RestId;
use crate::notice::Notice;
use crate::order_actor::OrderError;
use crate::restaurant_actor::CatalogError;
use crate::seed::SeedError;
use crate::user_actor::UserError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Seller {0} is not attached to a restaurant")]
    MissingRestaurant(String),

    /// Operation not allowed for the current session.
    #[error("Forbidden: {0}")]
    Forbidden(&'static str),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Restaurant {0} is closed")]
    RestaurantClosed(RestId),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Cart index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid data: {0}")]
    Invalid(String),

    /// The document store failed or went away.
    #[error("Store error: {0}")]
    Io(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Seed(#[from] SeedError),
}

impl AppError {
    /// The notice shown for this error.
    pub fn notice(&self, action: &'static str) -> Notice {
        match self {
            AppError::InvalidCredentials | AppError::MissingRestaurant(_) => Notice::LoginFailed,
            AppError::RestaurantClosed(rest_id) => Notice::RestaurantClosed { rest_id: *rest_id },
            _ => Notice::Failure { action },
        }
    }
}

impl From<UserError> for AppError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::InvalidCredentials => AppError::InvalidCredentials,
            UserError::MissingRestaurant(username) => AppError::MissingRestaurant(username),
            UserError::ValidationError(msg) => AppError::Invalid(msg),
            UserError::ActorCommunicationError(msg) => AppError::Io(msg),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(what) => AppError::NotFound(what),
            CatalogError::ValidationError(msg) => AppError::Invalid(msg),
            CatalogError::ActorCommunicationError(msg) => AppError::Io(msg),
        }
    }
}

impl From<OrderError> for AppError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(what) => AppError::NotFound(what),
            OrderError::WrongRestaurant { .. } => {
                AppError::Forbidden("order line belongs to another restaurant")
            }
            OrderError::ActorCommunicationError(msg) => AppError::Io(msg),
        }
    }
}
