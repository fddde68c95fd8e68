//! Custom actions for the Order collection.
//!
//! Staff never write a status directly. They send [`OrderAction::Advance`] and the
//! [`OrderLine`](crate::model::OrderLine) decides the next status itself, which keeps the
//! transitions one-directional.

use crate::model::RestId;

/// Custom actions for order lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Move the line one step along its status machine.
    ///
    /// On a `Food Ready` line this retires (deletes) the line. Only staff of the line's own
    /// restaurant may advance it.
    Advance { rest_id: RestId },
}
