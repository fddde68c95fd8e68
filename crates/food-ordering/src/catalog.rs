//! # Catalog Browser
//!
//! Restaurants on the map and in the card list, and the menu of the selected one.
//!
//! Every view of the restaurant list uses one presentation order: open restaurants by
//! ascending `rest_ID`, then closed ones by ascending `rest_ID`. A closed restaurant is never
//! opened, whether the user taps its map marker, its card, or a stale link to its menu.

use crate::clients::{MenuClient, RestaurantClient};
use crate::config::ImageUrls;
use crate::error::AppError;
use crate::fetch::FetchGuard;
use crate::model::{MenuItem, RestId, Restaurant};
use crate::notice::Screen;
use tracing::{info, instrument, warn};

/// Sort restaurants for presentation: open first, then closed, each by `rest_ID`.
pub fn presentation_order(mut restaurants: Vec<Restaurant>) -> Vec<Restaurant> {
    restaurants.sort_by_key(|r| (!r.is_open(), r.rest_id));
    restaurants
}

/// Dishes whose name contains `query`, ignoring case. An empty query keeps every dish.
pub fn filter_menu<'a>(items: &'a [MenuItem], query: &str) -> Vec<&'a MenuItem> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.food_name.to_lowercase().contains(&needle))
        .collect()
}

/// Where the user tapped a restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    Marker,
    Card,
}

/// Result of selecting an open restaurant.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub rest_id: RestId,
    /// Position of the restaurant's card, for scrolling the card list to it.
    pub card_index: usize,
    pub navigate_to: Screen,
}

/// Restaurants in presentation order.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantList {
    cards: Vec<Restaurant>,
}

impl RestaurantList {
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self {
            cards: presentation_order(restaurants),
        }
    }

    pub fn cards(&self) -> &[Restaurant] {
        &self.cards
    }

    /// Select a restaurant from the map or the card list.
    pub fn select(&self, rest_id: RestId, via: EntryPoint) -> Result<Selection, AppError> {
        let (card_index, restaurant) = self
            .cards
            .iter()
            .enumerate()
            .find(|(_, r)| r.rest_id == rest_id)
            .ok_or_else(|| AppError::NotFound(format!("restaurant {rest_id}")))?;

        if !restaurant.is_open() {
            warn!(%rest_id, ?via, "Closed restaurant selected");
            return Err(AppError::RestaurantClosed(rest_id));
        }

        info!(%rest_id, ?via, card_index, "Restaurant selected");
        Ok(Selection {
            rest_id,
            card_index,
            navigate_to: Screen::Menu(rest_id),
        })
    }
}

/// A restaurant's menu screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub restaurant: Restaurant,
    pub items: Vec<MenuItem>,
}

impl Menu {
    pub fn filter(&self, query: &str) -> Vec<&MenuItem> {
        filter_menu(&self.items, query)
    }
}

/// Read access to restaurants and menus.
#[derive(Clone)]
pub struct Catalog {
    restaurants: RestaurantClient,
    menu: MenuClient,
    images: ImageUrls,
    guard: FetchGuard,
}

impl Catalog {
    pub fn new(restaurants: RestaurantClient, menu: MenuClient, images: ImageUrls) -> Self {
        Self {
            restaurants,
            menu,
            images,
            guard: FetchGuard::new(),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_restaurants(&self) -> Result<RestaurantList, AppError> {
        Ok(RestaurantList::new(self.restaurants.list().await?))
    }

    #[instrument(skip(self))]
    pub async fn find_restaurant(&self, rest_id: RestId) -> Result<Restaurant, AppError> {
        Ok(self.restaurants.find(rest_id).await?)
    }

    /// Load the menu of an open restaurant.
    ///
    /// Returns `Ok(None)` when another menu load started before this one finished.
    #[instrument(skip(self))]
    pub async fn open_menu(&self, rest_id: RestId) -> Result<Option<Menu>, AppError> {
        let token = self.guard.begin();

        let restaurant = self.restaurants.find(rest_id).await?;
        if !restaurant.is_open() {
            warn!(%rest_id, "Menu of closed restaurant requested");
            return Err(AppError::RestaurantClosed(rest_id));
        }
        let items = self.menu.list_for(rest_id).await?;

        let menu = token.accept(Menu { restaurant, items });
        if menu.is_none() {
            info!(%rest_id, "Menu load superseded");
        }
        Ok(menu)
    }

    pub fn image_url(&self, picture: &str) -> String {
        self.images.url(picture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FoodId, MenuItemKey, RestaurantKey, RestaurantStatus};

    fn restaurant(rest_id: u32, status: RestaurantStatus) -> Restaurant {
        Restaurant {
            id: RestaurantKey(rest_id),
            rest_id: RestId(rest_id),
            rest_name: format!("Restaurant {rest_id}"),
            rest_picture: String::new(),
            status,
            latitude: 7.01,
            longitude: 100.49,
        }
    }

    fn dish(name: &str) -> MenuItem {
        MenuItem {
            id: MenuItemKey(1),
            food_id: FoodId(1),
            rest_id: RestId(1),
            food_name: name.into(),
            food_price: 50.0,
            food_picture: String::new(),
        }
    }

    fn sample_list() -> RestaurantList {
        RestaurantList::new(vec![
            restaurant(3, RestaurantStatus::Open),
            restaurant(1, RestaurantStatus::Close),
            restaurant(2, RestaurantStatus::Open),
        ])
    }

    #[test]
    fn test_open_restaurants_come_first() {
        let order: Vec<u32> = sample_list().cards().iter().map(|r| r.rest_id.0).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn test_closed_restaurant_rejected_from_every_entry_point() {
        let list = sample_list();
        for via in [EntryPoint::Marker, EntryPoint::Card] {
            let err = list.select(RestId(1), via).unwrap_err();
            assert!(matches!(err, AppError::RestaurantClosed(RestId(1))));
        }
    }

    #[test]
    fn test_marker_selection_reports_card_index() {
        let selection = sample_list().select(RestId(3), EntryPoint::Marker).unwrap();
        assert_eq!(selection.card_index, 1);
        assert_eq!(selection.navigate_to, Screen::Menu(RestId(3)));
    }

    #[test]
    fn test_unknown_restaurant_is_not_found() {
        let err = sample_list().select(RestId(9), EntryPoint::Card).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_menu_filter_is_case_insensitive_substring() {
        let items = vec![dish("Pad Thai"), dish("Green Curry"), dish("Tom Yum")];

        let found: Vec<&str> = filter_menu(&items, "pad")
            .iter()
            .map(|i| i.food_name.as_str())
            .collect();
        assert_eq!(found, vec!["Pad Thai"]);
        assert_eq!(filter_menu(&items, "CURRY").len(), 1);
        assert_eq!(filter_menu(&items, "").len(), 3);
        assert_eq!(items.len(), 3);
    }
}
