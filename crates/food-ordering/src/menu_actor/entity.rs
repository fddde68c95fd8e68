//! Document trait implementation for the MenuItem domain type.

use crate::model::{MenuFilter, MenuItem, MenuItemCreate, MenuItemKey, ReadOnly};
use crate::restaurant_actor::CatalogError;
use async_trait::async_trait;
use collection_actor::Document;

#[async_trait]
impl Document for MenuItem {
    type Id = MenuItemKey;
    type Create = MenuItemCreate;
    type Update = ReadOnly;
    type Filter = MenuFilter;
    type Action = ReadOnly;
    type ActionResult = ();
    type Context = ();
    type Error = CatalogError;

    fn from_create_params(id: MenuItemKey, params: MenuItemCreate) -> Result<Self, Self::Error> {
        if !params.food_price.is_finite() || params.food_price < 0.0 {
            return Err(CatalogError::ValidationError(format!(
                "food {} has invalid price {}",
                params.food_id, params.food_price
            )));
        }
        Ok(Self {
            id,
            food_id: params.food_id,
            rest_id: params.rest_id,
            food_name: params.food_name,
            food_price: params.food_price,
            food_picture: params.food_picture,
        })
    }

    fn id(&self) -> &MenuItemKey {
        &self.id
    }

    fn matches(&self, filter: &MenuFilter) -> bool {
        filter.rest_id.map_or(true, |rest_id| rest_id == self.rest_id)
    }

    async fn on_update(&mut self, update: ReadOnly, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(&mut self, action: ReadOnly, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
