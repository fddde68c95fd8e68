//! # Sequence Actor
//!
//! Owns the `orderSequence` collection, which holds a single counter document. Drawing a
//! number is one action on that document, so it runs inside the collection's sequential
//! loop and two checkouts can never receive the same order number.

pub mod entity;

use crate::model::{OrderNumber, OrderSequence};
use collection_actor::{CollectionActor, CollectionClient};

/// Custom actions for the counter document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceAction {
    /// Return `max(last, observed) + 1` and store it as the new `last`.
    Next { observed: OrderNumber },
}

/// Creates the Sequence actor and its generic client.
///
/// The counter document does not exist yet: spawn the actor, then call
/// [`SequenceClient::open`](crate::clients::SequenceClient::open) with the last number already in use.
pub fn new(buffer_size: usize) -> (CollectionActor<OrderSequence>, CollectionClient<OrderSequence>) {
    CollectionActor::new(buffer_size)
}
