use crate::clients::{MenuClient, OrderClient, RestaurantClient, SequenceClient, UserClient};
use crate::config::{Config, ImageUrls};
use crate::error::AppError;
use crate::seed::SeedData;
use crate::session::Session;
use crate::{menu_actor, order_actor, restaurant_actor, sequence_actor, user_actor};
use std::time::Duration;
use tracing::{error, info, warn};

/// Client handles a session needs, bundled so they can be cloned together.
#[derive(Clone)]
pub struct Services {
    pub users: UserClient,
    pub restaurants: RestaurantClient,
    pub menu: MenuClient,
    pub orders: OrderClient,
    pub sequence: SequenceClient,
    pub images: ImageUrls,
}

/// The runtime orchestrator for the ordering app's document store.
///
/// `OrderingSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping one actor per collection
/// - **Seeding**: loading reference data (users, restaurants, menus) and existing orders
/// - **Order numbering**: opening the sequence counter after the highest seeded `order_ID`
pub struct OrderingSystem {
    pub user_client: UserClient,
    pub restaurant_client: RestaurantClient,
    pub menu_client: MenuClient,
    pub order_client: OrderClient,
    pub sequence_client: SequenceClient,
    pub images: ImageUrls,

    shutdown_grace: Duration,
    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderingSystem {
    /// Start every collection actor and load `seed` into them.
    pub async fn start(config: Config, seed: SeedData) -> Result<Self, AppError> {
        let buffer = config.channel_buffer;

        // 1. Create actors (no dependencies)
        let (user_actor, user_client) = user_actor::new(buffer);
        let (restaurant_actor, restaurant_client) = restaurant_actor::new(buffer);
        let (menu_actor, menu_client) = menu_actor::new(buffer);
        let (order_actor, order_client) = order_actor::new(buffer);
        let (sequence_actor, sequence_generic) = sequence_actor::new(buffer);

        // 2. Start actors; none of them needs context
        let handles = vec![
            tokio::spawn(user_actor.run(())),
            tokio::spawn(restaurant_actor.run(())),
            tokio::spawn(menu_actor.run(())),
            tokio::spawn(order_actor.run(())),
            tokio::spawn(sequence_actor.run(())),
        ];

        // 3. Seed and open the order counter
        let last_order = seed.last_order_number();
        let users = user_client.insert_all(seed.user).await?.len();
        let restaurants = restaurant_client.insert_all(seed.restaurant).await?.len();
        let dishes = menu_client.insert_all(seed.list_food).await?.len();
        let orders = order_client.place(seed.order_food).await?.len();
        let sequence_client = SequenceClient::open(sequence_generic, last_order).await?;

        info!(
            users,
            restaurants,
            dishes,
            orders,
            %last_order,
            "Ordering system started"
        );

        Ok(Self {
            user_client,
            restaurant_client,
            menu_client,
            order_client,
            sequence_client,
            images: config.images(),
            shutdown_grace: config.shutdown_grace,
            handles,
        })
    }

    pub fn services(&self) -> Services {
        Services {
            users: self.user_client.clone(),
            restaurants: self.restaurant_client.clone(),
            menu: self.menu_client.clone(),
            orders: self.order_client.clone(),
            sequence: self.sequence_client.clone(),
            images: self.images.clone(),
        }
    }

    /// A fresh, signed-out session with an empty cart.
    pub fn session(&self) -> Session {
        Session::new(self.services())
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Each collection stops once every client handle is gone. A collection still held open
    /// by a session or view after the configured grace period is aborted.
    /// Returns an error if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), AppError> {
        info!("Shutting down system...");

        drop(self.user_client);
        drop(self.restaurant_client);
        drop(self.menu_client);
        drop(self.order_client);
        drop(self.sequence_client);

        for mut handle in self.handles {
            match tokio::time::timeout(self.shutdown_grace, &mut handle).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    error!("Actor task failed: {:?}", e);
                    return Err(AppError::Io(format!("Actor task failed: {e}")));
                }
                Err(_) => {
                    warn!(grace = ?self.shutdown_grace, "Collection still in use, aborting");
                    handle.abort();
                }
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
