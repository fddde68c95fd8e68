//! # Menu Actor
//!
//! Owns the `listFood` collection. Menus are listed per restaurant, and order views join
//! their lines back to dishes by `food_ID`.

pub mod entity;

pub use crate::restaurant_actor::CatalogError;

use crate::clients::MenuClient;
use crate::model::MenuItem;
use collection_actor::CollectionActor;

/// Creates a new Menu actor and its client.
pub fn new(buffer_size: usize) -> (CollectionActor<MenuItem>, MenuClient) {
    let (actor, generic_client) = CollectionActor::new(buffer_size);
    (actor, MenuClient::new(generic_client))
}
