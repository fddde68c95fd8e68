//! # User Actor
//!
//! Owns the `user` collection: the accounts the login screen checks credentials against.
//!
//! ## Structure
//!
//! - [`entity`] - [`Document`](collection_actor::Document) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use food_ordering::model::{Role, UserCreate};
//! use food_ordering::user_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     client
//!         .insert_all(vec![UserCreate {
//!             username: "somchai".into(),
//!             password: "1234".into(),
//!             role: Role::Customer,
//!             rest_id: None,
//!         }])
//!         .await?;
//!
//!     let user = client.find_by_credentials("somchai", "1234").await?;
//!     assert_eq!(user.map(|u| u.role), Some(Role::Customer));
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use collection_actor::CollectionActor;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (CollectionActor<User>, UserClient) {
    let (actor, generic_client) = CollectionActor::new(buffer_size);
    (actor, UserClient::new(generic_client))
}
