//! # Document Trait
//!
//! The `Document` trait is the contract every record type (User, Restaurant, MenuItem, OrderLine, …)
//! implements to be stored by a [`CollectionActor`](crate::CollectionActor). It names the
//! associated types for IDs, DTOs, filters, actions, context and errors, and provides the
//! lifecycle hooks (`on_create`, `on_update`, `on_delete`, `handle_action`).
//!
//! # Provided Methods (Hooks)
//! - [`Document::on_create`]
//! - [`Document::on_delete`]
//! - [`Document::retires_after`]
//!
//! The defaults do nothing, so read-only reference collections only implement the required items.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record must implement to be managed by a `CollectionActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can await other collections. The `Context` type is
/// injected into every hook when the actor is started with `run(context)`.
#[async_trait]
pub trait Document: Clone + Debug + Send + Sync + 'static {
    /// Document key generated by the collection.
    /// Ordering of keys is the collection's natural (insertion) order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new document.
    type Create: Send + Sync + Debug;

    /// Partial update applied by `on_update`.
    type Update: Send + Sync + Debug;

    /// Equality filter used by `query` and `subscribe`.
    type Filter: Clone + Send + Sync + Debug;

    /// Enum representing document-specific operations (e.g., `Advance`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// One error enum per collection.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full document from the generated key and the payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// The generated key of this document.
    fn id(&self) -> &Self::Id;

    /// Whether this document satisfies every equality constraint in `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the document is built and before it becomes visible.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the document is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom document-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Whether a successful action with this result ends the document's life.
    ///
    /// When `true` the actor removes the document in the same step and subscribers see a
    /// `Removed` change instead of `Modified`.
    fn retires_after(_result: &Self::ActionResult) -> bool {
        false
    }
}
