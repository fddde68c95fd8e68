//! # System Lifecycle & Orchestration
//!
//! Starts one collection actor per collection, loads the seed data into them and hands out
//! [`Session`](crate::session::Session)s. Shutting down drops every client and waits for the
//! actors to drain.
//!
//! ```rust,ignore
//! let system = OrderingSystem::start(Config::load()?, SeedData::demo()?).await?;
//!
//! let mut session = system.session();
//! session.login("customer", "1234").await?;
//! // ... browse, order, track ...
//! drop(session);
//!
//! system.shutdown().await?;
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of every request channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for every actor task to finish
//!
//! Sessions, desks and views hold client clones. Drop them before calling
//! [`OrderingSystem::shutdown`], otherwise their collections stay open and shutdown waits.
//!
//! No collection holds another collection's client in its context, so the dependency graph
//! is trivially acyclic and channel closure is enough to stop everything.

pub mod ordering_system;

pub use ordering_system::*;
