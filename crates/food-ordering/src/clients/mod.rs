//! Type-safe wrappers around [`CollectionClient`](collection_actor::CollectionClient).
//!
//! Each client maps [`FrameworkError`](collection_actor::FrameworkError) into its collection's
//! error enum and inherits `get`, `query` and `delete` from
//! [`DocumentClient`](collection_actor::DocumentClient).

pub mod menu_client;
pub mod order_client;
pub mod restaurant_client;
pub mod sequence_client;
pub mod user_client;

pub use menu_client::*;
pub use order_client::*;
pub use restaurant_client::*;
pub use sequence_client::*;
pub use user_client::*;
