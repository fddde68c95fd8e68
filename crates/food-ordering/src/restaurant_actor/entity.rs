//! Document trait implementation for the Restaurant domain type.

use crate::model::{ReadOnly, Restaurant, RestaurantCreate, RestaurantFilter, RestaurantKey};
use crate::restaurant_actor::CatalogError;
use async_trait::async_trait;
use collection_actor::Document;

#[async_trait]
impl Document for Restaurant {
    type Id = RestaurantKey;
    type Create = RestaurantCreate;
    type Update = ReadOnly;
    type Filter = RestaurantFilter;
    type Action = ReadOnly;
    type ActionResult = ();
    type Context = ();
    type Error = CatalogError;

    /// Rejects coordinates outside the valid latitude/longitude ranges.
    fn from_create_params(id: RestaurantKey, params: RestaurantCreate) -> Result<Self, Self::Error> {
        if !(-90.0..=90.0).contains(&params.latitude) || !(-180.0..=180.0).contains(&params.longitude)
        {
            return Err(CatalogError::ValidationError(format!(
                "restaurant {} has invalid coordinates",
                params.rest_id
            )));
        }
        Ok(Self {
            id,
            rest_id: params.rest_id,
            rest_name: params.rest_name,
            rest_picture: params.rest_picture,
            status: params.status,
            latitude: params.latitude,
            longitude: params.longitude,
        })
    }

    fn id(&self) -> &RestaurantKey {
        &self.id
    }

    fn matches(&self, filter: &RestaurantFilter) -> bool {
        filter.rest_id.map_or(true, |rest_id| rest_id == self.rest_id)
    }

    async fn on_update(&mut self, update: ReadOnly, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(&mut self, action: ReadOnly, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
