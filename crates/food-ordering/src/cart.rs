//! # Cart
//!
//! The session's shopping cart: one shared store, passed around by handle.
//!
//! The cart is a `tokio::sync::watch` channel holding the whole entry list. Writers replace or
//! modify the value through the narrow API below; every screen that shows the cart holds a
//! [`Cart::mirror`] receiver and always sees the latest list.
//!
//! Entries are snapshots of [`MenuItem`]s with an implicit quantity of one. The same dish may
//! appear several times.

use crate::clients::RestaurantClient;
use crate::config::ImageUrls;
use crate::error::AppError;
use crate::fetch::FetchGuard;
use crate::model::{MenuItem, RestId};
use crate::notice::Notice;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// A cart entry: the dish as it was when added.
pub type CartEntry = MenuItem;

/// Shown when a cart entry's restaurant cannot be resolved.
pub const UNKNOWN_RESTAURANT: &str = "Unknown Restaurant";

#[derive(Debug, Clone)]
pub struct Cart {
    entries: Arc<watch::Sender<Vec<CartEntry>>>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// An empty cart.
    pub fn new() -> Self {
        let (sender, _) = watch::channel(Vec::new());
        Self {
            entries: Arc::new(sender),
        }
    }

    /// Append a dish. No de-duplication.
    pub fn add(&self, item: MenuItem) -> Notice {
        let food_name = item.food_name.clone();
        self.entries.send_modify(|entries| entries.push(item));
        info!(food = %food_name, len = self.len(), "Added to cart");
        Notice::AddedToCart { food_name }
    }

    /// Remove the entry at `index`, keeping the order of the others.
    ///
    /// An out-of-range index leaves the cart untouched.
    pub fn remove_at(&self, index: usize) -> Result<Notice, AppError> {
        let mut removed = None;
        let mut len = 0;
        self.entries.send_if_modified(|entries| {
            len = entries.len();
            if index < entries.len() {
                removed = Some(entries.remove(index));
                true
            } else {
                false
            }
        });

        match removed {
            Some(item) => {
                info!(food = %item.food_name, index, "Removed from cart");
                Ok(Notice::RemovedFromCart {
                    food_name: item.food_name,
                })
            }
            None => {
                warn!(index, len, "Cart index out of range");
                Err(AppError::IndexOutOfRange { index, len })
            }
        }
    }

    pub fn clear(&self) {
        self.entries.send_replace(Vec::new());
        debug!("Cart cleared");
    }

    /// Remove one entry per dish in `ordered`, leaving anything added since in place.
    pub fn remove_ordered(&self, ordered: &[CartEntry]) {
        let mut removed = 0;
        self.entries.send_if_modified(|entries| {
            for item in ordered {
                if let Some(index) = entries.iter().position(|entry| entry == item) {
                    entries.remove(index);
                    removed += 1;
                }
            }
            removed > 0
        });
        debug!(removed, left = self.len(), "Ordered entries removed from cart");
    }

    /// Current entries, in insertion order.
    pub fn entries(&self) -> Vec<CartEntry> {
        self.entries.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn total_price(&self) -> f64 {
        self.entries.borrow().iter().map(|item| item.food_price).sum()
    }

    /// A receiver that always holds the current entries.
    pub fn mirror(&self) -> watch::Receiver<Vec<CartEntry>> {
        self.entries.subscribe()
    }
}

/// One row of the cart screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub index: usize,
    pub item: CartEntry,
    pub restaurant_name: String,
    pub image_url: String,
}

/// Loads cart rows with their restaurant names.
///
/// Only the latest load publishes; see [`FetchGuard`].
#[derive(Clone)]
pub struct CartLines {
    restaurants: RestaurantClient,
    images: ImageUrls,
    guard: FetchGuard,
}

impl CartLines {
    pub fn new(restaurants: RestaurantClient, images: ImageUrls) -> Self {
        Self {
            restaurants,
            images,
            guard: FetchGuard::new(),
        }
    }

    /// Rows for `entries`, or `None` if a newer load started meanwhile.
    pub async fn load(&self, entries: Vec<CartEntry>) -> Option<Vec<CartLine>> {
        let token = self.guard.begin();

        let mut names: HashMap<RestId, String> = HashMap::new();
        for item in &entries {
            if names.contains_key(&item.rest_id) {
                continue;
            }
            let name = match self.restaurants.find(item.rest_id).await {
                Ok(restaurant) => restaurant.rest_name,
                Err(e) => {
                    warn!(rest_id = %item.rest_id, error = %e, "Restaurant lookup failed");
                    UNKNOWN_RESTAURANT.to_string()
                }
            };
            names.insert(item.rest_id, name);
        }

        let lines = entries
            .into_iter()
            .enumerate()
            .map(|(index, item)| CartLine {
                index,
                restaurant_name: names
                    .get(&item.rest_id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_RESTAURANT.to_string()),
                image_url: self.images.url(&item.food_picture),
                item,
            })
            .collect();
        token.accept(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FoodId, MenuItemKey, Restaurant, RestaurantKey, RestaurantStatus};
    use collection_actor::mock::MockClient;

    fn dish(food_id: u32, name: &str, price: f64) -> MenuItem {
        MenuItem {
            id: MenuItemKey(food_id),
            food_id: FoodId(food_id),
            rest_id: RestId(1),
            food_name: name.into(),
            food_price: price,
            food_picture: format!("pic{food_id}"),
        }
    }

    fn names(cart: &Cart) -> Vec<String> {
        cart.entries().into_iter().map(|i| i.food_name).collect()
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.total_price(), 0.0);
    }

    #[test]
    fn test_add_keeps_duplicates_and_order() {
        let cart = Cart::new();
        let notice = cart.add(dish(1, "Pad Thai", 50.0));
        cart.add(dish(2, "Green Curry", 60.0));
        cart.add(dish(1, "Pad Thai", 50.0));

        assert_eq!(
            notice,
            Notice::AddedToCart {
                food_name: "Pad Thai".into()
            }
        );
        assert_eq!(names(&cart), vec!["Pad Thai", "Green Curry", "Pad Thai"]);
        assert_eq!(cart.total_price(), 160.0);
    }

    #[test]
    fn test_remove_at_preserves_order() {
        let cart = Cart::new();
        cart.add(dish(1, "Pad Thai", 50.0));
        cart.add(dish(2, "Green Curry", 60.0));
        cart.add(dish(3, "Tom Yum", 80.0));

        let notice = cart.remove_at(1).unwrap();
        assert_eq!(
            notice,
            Notice::RemovedFromCart {
                food_name: "Green Curry".into()
            }
        );
        assert_eq!(names(&cart), vec!["Pad Thai", "Tom Yum"]);
    }

    #[test]
    fn test_remove_out_of_range_leaves_cart_untouched() {
        let cart = Cart::new();
        cart.add(dish(1, "Pad Thai", 50.0));
        let mirror = cart.mirror();

        let err = cart.remove_at(1).unwrap_err();
        assert!(matches!(err, AppError::IndexOutOfRange { index: 1, len: 1 }));
        assert_eq!(names(&cart), vec!["Pad Thai"]);
        assert!(!mirror.has_changed().unwrap());
    }

    #[test]
    fn test_remove_ordered_keeps_later_additions() {
        let cart = Cart::new();
        cart.add(dish(1, "Pad Thai", 50.0));
        cart.add(dish(1, "Pad Thai", 50.0));
        let ordered = cart.entries();
        cart.add(dish(3, "Tom Yum", 80.0));
        cart.add(dish(1, "Pad Thai", 50.0));

        cart.remove_ordered(&ordered);
        assert_eq!(names(&cart), vec!["Tom Yum", "Pad Thai"]);
    }

    #[test]
    fn test_mirror_follows_every_change() {
        let cart = Cart::new();
        let screen = cart.clone();
        let mirror = cart.mirror();

        screen.add(dish(1, "Pad Thai", 50.0));
        screen.add(dish(2, "Green Curry", 60.0));
        assert_eq!(mirror.borrow().len(), 2);

        cart.remove_at(0).unwrap();
        assert_eq!(mirror.borrow()[0].food_name, "Green Curry");

        cart.clear();
        assert!(mirror.borrow().is_empty());
        assert!(screen.is_empty());
    }

    #[tokio::test]
    async fn test_cart_lines_fall_back_to_placeholder_name() {
        let mut mock = MockClient::<Restaurant>::new();
        mock.expect_query().return_ok(vec![Restaurant {
            id: RestaurantKey(1),
            rest_id: RestId(1),
            rest_name: "Baan Pad Thai".into(),
            rest_picture: String::new(),
            status: RestaurantStatus::Open,
            latitude: 7.0,
            longitude: 100.5,
        }]);
        mock.expect_query().return_ok(vec![]);

        let loader = CartLines::new(RestaurantClient::new(mock.client()), ImageUrls::default());
        let mut orphan = dish(9, "Mystery Soup", 30.0);
        orphan.rest_id = RestId(42);

        let lines = loader
            .load(vec![dish(1, "Pad Thai", 50.0), orphan])
            .await
            .unwrap();
        assert_eq!(lines[0].restaurant_name, "Baan Pad Thai");
        assert_eq!(lines[1].restaurant_name, UNKNOWN_RESTAURANT);
        assert_eq!(
            lines[0].image_url,
            "https://drive.google.com/uc?export=view&id=pic1"
        );
        mock.verify();
    }
}
