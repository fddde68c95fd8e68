//! Order lines and the order status state machine.
//!
//! One checkout writes one [`OrderLine`] per cart entry; all lines of a checkout share an
//! [`OrderNumber`]. Staff move each line forward independently:
//!
//! ```text
//! Unconfirmed --Confirm--> Preparing Food --Food Ready--> Food Ready --Picked up--> (deleted)
//! ```
use crate::model::{document_key, FoodId, RestId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

document_key!(
    /// Key of a document in the `orderFood` collection.
    OrderLineKey,
    "order_line"
);

/// Customer-facing order number (`order_ID`), shared by every line of one checkout.
///
/// Lines without a number sort as `0`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct OrderNumber(pub u32);

impl OrderNumber {
    /// The number following `self`.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fulfillment status of one order line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Unconfirmed,
    #[serde(rename = "Preparing Food")]
    PreparingFood,
    #[serde(rename = "Food Ready")]
    FoodReady,
}

/// Outcome of advancing an order line one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The line moved to the contained status.
    Advanced {
        order_number: OrderNumber,
        status: OrderStatus,
    },
    /// The food was collected and the line is gone.
    PickedUp { order_number: OrderNumber },
}

impl OrderStatus {
    /// The next status, or `None` when the next step removes the line.
    pub fn advance(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Unconfirmed => Some(OrderStatus::PreparingFood),
            OrderStatus::PreparingFood => Some(OrderStatus::FoodReady),
            OrderStatus::FoodReady => None,
        }
    }

    /// Label of the staff button that performs the next step.
    pub fn action_label(self) -> &'static str {
        match self {
            OrderStatus::Unconfirmed => "Confirm",
            OrderStatus::PreparingFood => "Food Ready",
            OrderStatus::FoodReady => "Picked up",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Unconfirmed => write!(f, "Unconfirmed"),
            OrderStatus::PreparingFood => write!(f, "Preparing Food"),
            OrderStatus::FoodReady => write!(f, "Food Ready"),
        }
    }
}

/// One dish of a placed order.
///
/// # Actor Framework
/// Implements [`Document`](collection_actor::Document) in
/// [`order_actor::entity`](crate::order_actor::entity). Staff advance it with
/// [`OrderAction::Advance`](crate::order_actor::OrderAction); the last step retires it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    pub id: OrderLineKey,
    #[serde(rename = "food_ID")]
    pub food_id: FoodId,
    #[serde(rename = "rest_ID")]
    pub rest_id: RestId,
    #[serde(rename = "order_ID")]
    pub order_number: OrderNumber,
    pub status: OrderStatus,
}

/// Payload for inserting an order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineCreate {
    #[serde(rename = "food_ID")]
    pub food_id: FoodId,
    #[serde(rename = "rest_ID")]
    pub rest_id: RestId,
    #[serde(rename = "order_ID", default)]
    pub order_number: OrderNumber,
    #[serde(default)]
    pub status: OrderStatus,
}

/// Equality filter on the `orderFood` collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub rest_id: Option<RestId>,
    pub order_number: Option<OrderNumber>,
}

impl OrderFilter {
    pub fn restaurant(rest_id: RestId) -> Self {
        Self {
            rest_id: Some(rest_id),
            order_number: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_moves_forward_only() {
        assert_eq!(
            OrderStatus::Unconfirmed.advance(),
            Some(OrderStatus::PreparingFood)
        );
        assert_eq!(
            OrderStatus::PreparingFood.advance(),
            Some(OrderStatus::FoodReady)
        );
        assert_eq!(OrderStatus::FoodReady.advance(), None);
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(OrderStatus::Unconfirmed.action_label(), "Confirm");
        assert_eq!(OrderStatus::PreparingFood.action_label(), "Food Ready");
        assert_eq!(OrderStatus::FoodReady.action_label(), "Picked up");
    }

    #[test]
    fn test_wire_names() {
        let line: OrderLineCreate =
            serde_json::from_str(r#"{"food_ID": 7, "rest_ID": 2, "status": "Preparing Food"}"#)
                .unwrap();
        assert_eq!(line.order_number, OrderNumber(0));
        assert_eq!(line.status, OrderStatus::PreparingFood);
        assert_eq!(OrderStatus::FoodReady.to_string(), "Food Ready");
    }
}
