//! # Order Actor
//!
//! Owns the `orderFood` collection: one document per ordered dish.
//!
//! ## Structure
//!
//! - [`entity`] - [`Document`](collection_actor::Document) implementation for [`OrderLine`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`actions`] - [`OrderAction`] for the staff status machine
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Custom Actions
//!
//! ```rust,ignore
//! // Unconfirmed -> Preparing Food -> Food Ready -> deleted
//! let transition = order_client.advance(line_key, rest_id).await?;
//! ```
//!
//! Advances are serialized by the collection: two staff members pressing the button on the
//! same line move it two steps, in arrival order. Advancing a line that was already picked
//! up fails with [`OrderError::NotFound`]; advancing another restaurant's line fails with
//! [`OrderError::WrongRestaurant`] and leaves it untouched.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::OrderLine;
use collection_actor::CollectionActor;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (CollectionActor<OrderLine>, OrderClient) {
    let (actor, generic_client) = CollectionActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
