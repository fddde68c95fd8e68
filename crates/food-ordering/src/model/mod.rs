//! # Domain Model
//!
//! Plain records for the five collections the app reads and writes:
//!
//! | Collection | Record | Written by the app |
//! |------------|--------|--------------------|
//! | `user` | [`User`] | no |
//! | `restaurant` | [`Restaurant`] | no |
//! | `listFood` | [`MenuItem`] | no |
//! | `orderFood` | [`OrderLine`] | checkout (insert), staff desk (advance) |
//! | `orderSequence` | [`OrderSequence`] | checkout (next number) |
//!
//! Every record keeps its collection field names on the wire (`rest_ID`, `food_ID`,
//! `order_ID`, …) through serde renames, so seed files use the same shape as the hosted store.

pub mod menu_item;
pub mod order;
pub mod restaurant;
pub mod sequence;
pub mod user;

pub use menu_item::*;
pub use order::*;
pub use restaurant::*;
pub use sequence::*;
pub use user::*;

/// Update and action type for collections the app never writes.
///
/// The enum has no variants, so a client cannot even build an update request for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOnly {}

/// Declares a document key newtype with a prefixed `Display` (`user_3`, `order_line_12`).
macro_rules! document_key {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

pub(crate) use document_key;
