use crate::model::document_key;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

document_key!(
    /// Key of a document in the `restaurant` collection.
    RestaurantKey,
    "restaurant"
);

/// The public restaurant number (`rest_ID`), shown on map markers and cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestId(pub u32);

impl Display for RestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RestaurantStatus {
    Open,
    Close,
}

/// A restaurant shown on the map and in the card list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Restaurant {
    pub id: RestaurantKey,
    #[serde(rename = "rest_ID")]
    pub rest_id: RestId,
    pub rest_name: String,
    pub rest_picture: String,
    pub status: RestaurantStatus,
    pub latitude: f64,
    pub longitude: f64,
}

impl Restaurant {
    pub fn is_open(&self) -> bool {
        self.status == RestaurantStatus::Open
    }
}

/// Payload for inserting a restaurant (seed data).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCreate {
    #[serde(rename = "rest_ID")]
    pub rest_id: RestId,
    pub rest_name: String,
    #[serde(default)]
    pub rest_picture: String,
    pub status: RestaurantStatus,
    pub latitude: f64,
    pub longitude: f64,
}

/// Equality filter on the `restaurant` collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestaurantFilter {
    pub rest_id: Option<RestId>,
}

impl RestaurantFilter {
    pub fn rest_id(rest_id: RestId) -> Self {
        Self {
            rest_id: Some(rest_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_uses_collection_spelling() {
        let seed: RestaurantCreate = serde_json::from_str(
            r#"{"rest_ID": 4, "rest_name": "Krua Khun Yai", "status": "close",
                "latitude": 7.0121, "longitude": 100.4991}"#,
        )
        .unwrap();
        assert_eq!(seed.rest_id, RestId(4));
        assert_eq!(seed.status, RestaurantStatus::Close);
        assert!(seed.rest_picture.is_empty());
        assert_eq!(
            serde_json::to_string(&RestaurantStatus::Open).unwrap(),
            r#""open""#
        );
    }
}
