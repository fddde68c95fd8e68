//! # Restaurant Actor
//!
//! Owns the `restaurant` collection (names, pictures, open/close status and map coordinates).
//! The collection is read-only reference data; ordering for presentation happens in
//! [`catalog`](crate::catalog), not here.
//!
//! - [`entity`] - [`Document`](collection_actor::Document) implementation for [`Restaurant`]
//! - [`error`] - [`CatalogError`], shared with the menu collection

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::RestaurantClient;
use crate::model::Restaurant;
use collection_actor::CollectionActor;

/// Creates a new Restaurant actor and its client.
pub fn new(buffer_size: usize) -> (CollectionActor<Restaurant>, RestaurantClient) {
    let (actor, generic_client) = CollectionActor::new(buffer_size);
    (actor, RestaurantClient::new(generic_client))
}
