//! # Menu Client
//!
//! Provides a high‑level API for interacting with the `MenuItem` actor.
use crate::model::{MenuFilter, MenuItem, MenuItemCreate, MenuItemKey, RestId};
use crate::restaurant_actor::CatalogError;
use async_trait::async_trait;
use collection_actor::{CollectionClient, DocumentClient, FrameworkError};
use tracing::{debug, instrument};

/// Client for interacting with the Menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: CollectionClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: CollectionClient<MenuItem>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl DocumentClient<MenuItem> for MenuClient {
    type Error = CatalogError;

    fn inner(&self) -> &CollectionClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CatalogError::from(e)
    }
}

impl MenuClient {
    /// Insert dishes, all or none.
    #[instrument(skip(self, items), fields(count = items.len()))]
    pub async fn insert_all(
        &self,
        items: Vec<MenuItemCreate>,
    ) -> Result<Vec<MenuItemKey>, CatalogError> {
        debug!("Sending request");
        self.inner
            .create_batch(items)
            .await
            .map_err(CatalogError::from)
    }

    /// The menu of one restaurant, in insertion order.
    #[instrument(skip(self))]
    pub async fn list_for(&self, rest_id: RestId) -> Result<Vec<MenuItem>, CatalogError> {
        self.query(MenuFilter::restaurant(rest_id)).await
    }
}
