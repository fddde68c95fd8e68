//! # Customer Status View
//!
//! Live list of placed order lines with their dishes, sorted by order number. Whenever the
//! store reports a line as modified (staff moved it forward) the update carries a status
//! notice for it.

use crate::clients::{MenuClient, OrderClient};
use crate::config::ImageUrls;
use crate::error::AppError;
use crate::fulfillment::{join_rows, OrderRow};
use crate::model::{OrderFilter, OrderLine};
use crate::notice::Notice;
use collection_actor::{Snapshot, Subscription};
use tracing::{debug, info};

/// One delivery of the status view.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusUpdate {
    pub rows: Vec<OrderRow>,
    /// One notice per line modified in this delivery.
    pub notices: Vec<Notice>,
}

/// Build the status view for one snapshot.
pub async fn status_update(
    snapshot: &Snapshot<OrderLine>,
    menu: &MenuClient,
    images: &ImageUrls,
) -> StatusUpdate {
    let rows = join_rows(&snapshot.documents, menu, None, images).await;
    let notices: Vec<Notice> = snapshot
        .modified()
        .map(|line| Notice::StatusChanged {
            order_number: line.order_number,
            food_name: rows
                .iter()
                .find(|row| row.key == line.id)
                .and_then(|row| row.food_name())
                .map(str::to_string),
            status: line.status,
        })
        .collect();
    if !notices.is_empty() {
        debug!(count = notices.len(), "Status notices");
    }
    StatusUpdate { rows, notices }
}

pub struct StatusBoard {
    subscription: Subscription<OrderLine>,
    menu: MenuClient,
    images: ImageUrls,
}

impl StatusBoard {
    /// Subscribe to every order line.
    pub async fn open(
        orders: &OrderClient,
        menu: MenuClient,
        images: ImageUrls,
    ) -> Result<Self, AppError> {
        let subscription = orders.watch(OrderFilter::default()).await?;
        info!("Status board opened");
        Ok(Self::from_subscription(subscription, menu, images))
    }

    pub fn from_subscription(
        subscription: Subscription<OrderLine>,
        menu: MenuClient,
        images: ImageUrls,
    ) -> Self {
        Self {
            subscription,
            menu,
            images,
        }
    }

    /// The view after the next store change. `None` once the store has shut down.
    pub async fn next(&mut self) -> Option<StatusUpdate> {
        let snapshot = self.subscription.next().await?;
        Some(status_update(&snapshot, &self.menu, &self.images).await)
    }

    /// Like [`StatusBoard::next`], but only for a change that already arrived.
    pub async fn next_ready(&mut self) -> Option<StatusUpdate> {
        let snapshot = self.subscription.try_next()?;
        Some(status_update(&snapshot, &self.menu, &self.images).await)
    }

    /// Release the subscription.
    pub fn close(self) {
        self.subscription.unsubscribe();
    }
}
