//! # Restaurant Client
//!
//! Provides a high‑level API for interacting with the `Restaurant` actor.
use crate::model::{RestId, Restaurant, RestaurantCreate, RestaurantFilter, RestaurantKey};
use crate::restaurant_actor::CatalogError;
use async_trait::async_trait;
use collection_actor::{CollectionClient, DocumentClient, FrameworkError};
use tracing::{debug, instrument};

/// Client for interacting with the Restaurant actor.
#[derive(Clone)]
pub struct RestaurantClient {
    inner: CollectionClient<Restaurant>,
}

impl RestaurantClient {
    pub fn new(inner: CollectionClient<Restaurant>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl DocumentClient<Restaurant> for RestaurantClient {
    type Error = CatalogError;

    fn inner(&self) -> &CollectionClient<Restaurant> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CatalogError::from(e)
    }
}

impl RestaurantClient {
    /// Insert restaurants, all or none.
    #[instrument(skip(self, restaurants), fields(count = restaurants.len()))]
    pub async fn insert_all(
        &self,
        restaurants: Vec<RestaurantCreate>,
    ) -> Result<Vec<RestaurantKey>, CatalogError> {
        debug!("Sending request");
        self.inner
            .create_batch(restaurants)
            .await
            .map_err(CatalogError::from)
    }

    /// Every restaurant, in insertion order.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Restaurant>, CatalogError> {
        self.query(RestaurantFilter::default()).await
    }

    /// The restaurant with this `rest_ID`.
    #[instrument(skip(self))]
    pub async fn find(&self, rest_id: RestId) -> Result<Restaurant, CatalogError> {
        self.query(RestaurantFilter::rest_id(rest_id))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| CatalogError::NotFound(format!("restaurant {rest_id}")))
    }
}
