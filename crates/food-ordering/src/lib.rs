//! # Food Ordering Core
//!
//! The application core of a mobile food-ordering app. Customers browse restaurants, fill a
//! cart, place orders and follow their status. Restaurant staff confirm, prepare and hand over
//! orders. Storage, credential lookup and live updates go through one collection actor per
//! collection (see [`collection_actor`]).
//!
//! - **[model]**: records and the order status machine
//! - **`*_actor`**: one collection per record type, with its error enum
//! - **[clients]**: type-safe wrappers over the collections
//! - **[session]**: login/logout and role-gated capabilities
//! - **[catalog]**, **[cart]**, **[checkout]**: the customer flow
//! - **[fulfillment]**, **[status]**: live order views for staff and customers
//! - **[lifecycle]**: starting, seeding and stopping the collections

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod error;
pub mod fetch;
pub mod fulfillment;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod notice;
pub mod order_actor;
pub mod restaurant_actor;
pub mod seed;
pub mod sequence_actor;
pub mod session;
pub mod status;
pub mod user_actor;

pub use error::AppError;
