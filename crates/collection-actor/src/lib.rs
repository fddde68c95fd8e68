//! # Collection Actor
//!
//! An in-process document store built on the **Actor Model**. Each collection (users,
//! restaurants, menu items, order lines, …) is owned by one Tokio task that processes requests
//! sequentially, so every operation on a collection is atomic with respect to the others and no
//! locks are needed.
//!
//! The store is deliberately opaque: it offers the operations an app needs from a hosted
//! document database and nothing more.
//!
//! | Operation | Client method | Notes |
//! |-----------|---------------|-------|
//! | query | [`CollectionClient::query`] | equality filter, insertion order |
//! | insert | [`CollectionClient::create`] / [`CollectionClient::create_batch`] | batch is all-or-nothing |
//! | update | [`CollectionClient::update`] / [`CollectionClient::perform_action`] | actions may retire the document |
//! | delete | [`CollectionClient::delete`] | |
//! | subscribe | [`CollectionClient::subscribe`] | cancellable [`Subscription`] of [`Snapshot`]s |
//!
//! ## Architecture Overview
//!
//! 1. **Document Layer** ([`Document`]) - record types, filters and lifecycle hooks
//! 2. **Runtime Layer** ([`CollectionActor`]) - message processing, storage, change fan-out
//! 3. **Interface Layer** ([`CollectionClient`], [`DocumentClient`]) - type-safe communication
//!
//! ```rust
//! use collection_actor::{ChangeKind, CollectionActor, Document};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Dish {
//!     id: u32,
//!     kitchen: u32,
//!     name: String,
//! }
//!
//! #[derive(Debug)] struct DishCreate { kitchen: u32, name: String }
//! #[derive(Debug)] struct Rename(String);
//! #[derive(Debug)] enum DishAction {}
//! #[derive(Debug, thiserror::Error)] #[error("dish error")] struct DishError;
//!
//! #[async_trait]
//! impl Document for Dish {
//!     type Id = u32;
//!     type Create = DishCreate;
//!     type Update = Rename;
//!     type Filter = Option<u32>;
//!     type Action = DishAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = DishError;
//!
//!     fn from_create_params(id: u32, p: DishCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, kitchen: p.kitchen, name: p.name })
//!     }
//!     fn id(&self) -> &u32 { &self.id }
//!     fn matches(&self, kitchen: &Option<u32>) -> bool {
//!         kitchen.map_or(true, |k| k == self.kitchen)
//!     }
//!     async fn on_update(&mut self, update: Rename, _: &()) -> Result<(), Self::Error> {
//!         self.name = update.0;
//!         Ok(())
//!     }
//!     async fn handle_action(&mut self, a: DishAction, _: &()) -> Result<(), Self::Error> { match a {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = CollectionActor::<Dish>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let ids = client
//!         .create_batch(vec![
//!             DishCreate { kitchen: 1, name: "Larb".into() },
//!             DishCreate { kitchen: 2, name: "Som Tam".into() },
//!         ])
//!         .await
//!         .unwrap();
//!
//!     let mut live = client.subscribe(Some(1)).await.unwrap();
//!     assert_eq!(live.next().await.unwrap().documents.len(), 1);
//!
//!     client.update(ids[0], Rename("Larb Moo".into())).await.unwrap();
//!     let snapshot = live.next().await.unwrap();
//!     assert_eq!(snapshot.changes[0].kind, ChangeKind::Modified);
//!     assert_eq!(snapshot.documents[0].name, "Larb Moo");
//!     live.unsubscribe();
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are injected when the actor starts (`actor.run(context)`), not at construction
//! time, so collections can be created first and wired afterwards.
//!
//! ## Concurrency Model
//!
//! - Each collection runs in its own Tokio task
//! - Requests are processed **sequentially** within a collection
//! - Different collections run in **parallel**
//! - Subscribers receive snapshots on unbounded channels and are pruned once they hang up
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real [`CollectionClient`] from a queue of expectations, and
//! [`Subscription::channel`] gives views a subscription that a test drives by hand.

pub mod actor;
pub mod client;
pub mod document;
pub mod document_client;
pub mod error;
pub mod message;
pub mod mock;
pub mod subscription;
pub mod telemetry;

pub use actor::CollectionActor;
pub use client::CollectionClient;
pub use document::Document;
pub use document_client::DocumentClient;
pub use error::FrameworkError;
pub use message::{CollectionRequest, Response};
pub use subscription::{Change, ChangeKind, Snapshot, SnapshotFeed, Subscription};
