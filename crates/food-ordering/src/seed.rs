//! Seed data for the document store.
//!
//! The file layout mirrors the hosted collections, one array per collection:
//!
//! ```json
//! { "user": [...], "restaurant": [...], "listFood": [...], "orderFood": [...] }
//! ```

use crate::model::{MenuItemCreate, OrderLineCreate, OrderNumber, RestaurantCreate, UserCreate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

const DEMO_SEED: &str = include_str!("../data/seed.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed seed data: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub user: Vec<UserCreate>,
    #[serde(default)]
    pub restaurant: Vec<RestaurantCreate>,
    #[serde(rename = "listFood", default)]
    pub list_food: Vec<MenuItemCreate>,
    #[serde(rename = "orderFood", default)]
    pub order_food: Vec<OrderLineCreate>,
}

impl SeedData {
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let json = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let seed = Self::from_json(&json)?;
        info!(path = %path.display(), "Seed loaded");
        Ok(seed)
    }

    /// Built-in data: three restaurants (one closed), their menus and two accounts per role.
    pub fn demo() -> Result<Self, SeedError> {
        Self::from_json(DEMO_SEED)
    }

    /// The seed at `path`, or the demo data.
    pub fn load_or_demo(path: Option<&Path>) -> Result<Self, SeedError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::demo(),
        }
    }

    /// Highest order number in `orderFood`, `0` when there is none.
    pub fn last_order_number(&self) -> OrderNumber {
        self.order_food
            .iter()
            .map(|line| line.order_number)
            .max()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FoodId, OrderStatus, RestId, Role};

    #[test]
    fn test_demo_seed_parses() {
        let seed = SeedData::demo().unwrap();
        assert_eq!(seed.restaurant.len(), 3);
        assert!(seed.list_food.iter().any(|item| item.food_name == "Pad Thai"));
        let seller = seed
            .user
            .iter()
            .find(|user| user.role == Role::Seller)
            .unwrap();
        assert_eq!(seller.rest_id, Some(RestId(1)));
        assert_eq!(seed.last_order_number(), OrderNumber(0));
    }

    #[test]
    fn test_collection_names_on_the_wire() {
        let seed = SeedData::from_json(
            r#"{"orderFood": [
                {"food_ID": 1, "rest_ID": 1, "order_ID": 4, "status": "Food Ready"},
                {"food_ID": 2, "rest_ID": 1, "order_ID": 9, "status": "Unconfirmed"}
            ]}"#,
        )
        .unwrap();
        assert!(seed.user.is_empty());
        assert_eq!(seed.order_food[0].food_id, FoodId(1));
        assert_eq!(seed.order_food[0].status, OrderStatus::FoodReady);
        assert_eq!(seed.last_order_number(), OrderNumber(9));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = SeedData::load(Path::new("/nonexistent/seed.json")).unwrap_err();
        assert!(matches!(err, SeedError::Read { .. }));
    }
}
