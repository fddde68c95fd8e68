use crate::model::{document_key, RestId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

document_key!(
    /// Key of a document in the `listFood` collection.
    MenuItemKey,
    "menu_item"
);

/// The public dish number (`food_ID`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodId(pub u32);

impl Display for FoodId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A dish on a restaurant's menu. Cart entries are snapshots of this record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub id: MenuItemKey,
    #[serde(rename = "food_ID")]
    pub food_id: FoodId,
    #[serde(rename = "rest_ID")]
    pub rest_id: RestId,
    pub food_name: String,
    pub food_price: f64,
    pub food_picture: String,
}

/// Payload for inserting a menu item (seed data).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    #[serde(rename = "food_ID")]
    pub food_id: FoodId,
    #[serde(rename = "rest_ID")]
    pub rest_id: RestId,
    pub food_name: String,
    pub food_price: f64,
    #[serde(default)]
    pub food_picture: String,
}

/// Equality filter on the `listFood` collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuFilter {
    pub rest_id: Option<RestId>,
}

impl MenuFilter {
    pub fn restaurant(rest_id: RestId) -> Self {
        Self {
            rest_id: Some(rest_id),
        }
    }
}
