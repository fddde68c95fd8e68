//! # Staff Fulfillment View
//!
//! A seller's live queue of open order lines for their restaurant. Every snapshot from the
//! store is joined with the menu again from scratch and sorted by order number; there is no
//! incremental diffing. A line whose dish cannot be found still shows up, as a placeholder row.

use crate::clients::{MenuClient, OrderClient};
use crate::config::ImageUrls;
use crate::error::AppError;
use crate::model::{
    MenuFilter, MenuItem, OrderFilter, OrderLine, OrderLineKey, OrderNumber, OrderStatus, RestId,
    Transition,
};
use crate::notice::Notice;
use collection_actor::{DocumentClient, Subscription};
use tracing::{info, instrument, warn};

/// An order line joined with its dish.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub key: OrderLineKey,
    pub order_number: OrderNumber,
    pub rest_id: RestId,
    pub status: OrderStatus,
    /// `None` when the dish is missing from the menu.
    pub dish: Option<MenuItem>,
    pub image_url: Option<String>,
}

impl OrderRow {
    pub fn food_name(&self) -> Option<&str> {
        self.dish.as_ref().map(|dish| dish.food_name.as_str())
    }

    /// Label of the staff button for this row.
    pub fn action_label(&self) -> &'static str {
        self.status.action_label()
    }
}

/// Join `lines` with the menu and sort them by order number.
///
/// With `rest_id` set, dishes must match both `food_ID` and `rest_ID`; otherwise `food_ID`
/// alone. Lookup failures are logged and produce placeholder rows.
pub async fn join_rows(
    lines: &[OrderLine],
    menu: &MenuClient,
    rest_id: Option<RestId>,
    images: &ImageUrls,
) -> Vec<OrderRow> {
    let dishes = match menu.query(MenuFilter { rest_id }).await {
        Ok(dishes) => dishes,
        Err(e) => {
            warn!(error = %e, "Menu lookup failed, showing placeholders");
            Vec::new()
        }
    };

    let mut rows: Vec<OrderRow> = lines
        .iter()
        .map(|line| {
            let dish = dishes
                .iter()
                .find(|dish| dish.food_id == line.food_id)
                .cloned();
            if dish.is_none() {
                warn!(line = %line.id, food_id = %line.food_id, "Dish not found");
            }
            OrderRow {
                key: line.id,
                order_number: line.order_number,
                rest_id: line.rest_id,
                status: line.status,
                image_url: dish.as_ref().map(|d| images.url(&d.food_picture)),
                dish,
            }
        })
        .collect();
    rows.sort_by_key(|row| row.order_number);
    rows
}

/// A seller's fulfillment desk. Only a seller session can open one.
#[derive(Clone)]
pub struct StaffDesk {
    rest_id: RestId,
    orders: OrderClient,
    menu: MenuClient,
    images: ImageUrls,
}

impl StaffDesk {
    pub fn new(rest_id: RestId, orders: OrderClient, menu: MenuClient, images: ImageUrls) -> Self {
        Self {
            rest_id,
            orders,
            menu,
            images,
        }
    }

    pub fn rest_id(&self) -> RestId {
        self.rest_id
    }

    /// Subscribe to this restaurant's open order lines.
    #[instrument(skip(self), fields(rest_id = %self.rest_id))]
    pub async fn open_queue(&self) -> Result<OrderQueue, AppError> {
        let subscription = self
            .orders
            .watch(OrderFilter::restaurant(self.rest_id))
            .await?;
        info!("Order queue opened");
        Ok(OrderQueue {
            subscription,
            rest_id: self.rest_id,
            menu: self.menu.clone(),
            images: self.images.clone(),
        })
    }

    /// Press the row's action button: confirm, mark ready, or hand over.
    #[instrument(skip(self, row), fields(rest_id = %self.rest_id, line = %row.key))]
    pub async fn advance(&self, row: &OrderRow) -> Result<Notice, AppError> {
        if row.rest_id != self.rest_id {
            warn!(line_rest_id = %row.rest_id, "Order line belongs to another restaurant");
            return Err(AppError::Forbidden("order line belongs to another restaurant"));
        }

        let notice = match self.orders.advance(row.key, self.rest_id).await? {
            Transition::Advanced {
                order_number,
                status,
            } => Notice::StatusChanged {
                order_number,
                food_name: row.food_name().map(str::to_string),
                status,
            },
            Transition::PickedUp { order_number } => Notice::OrderCompleted { order_number },
        };
        info!(%notice, "Order line advanced");
        Ok(notice)
    }
}

/// Live, joined view of one restaurant's open order lines.
pub struct OrderQueue {
    subscription: Subscription<OrderLine>,
    rest_id: RestId,
    menu: MenuClient,
    images: ImageUrls,
}

impl OrderQueue {
    /// Rows after the next store change. `None` once the store has shut down.
    pub async fn next(&mut self) -> Option<Vec<OrderRow>> {
        let snapshot = self.subscription.next().await?;
        Some(join_rows(&snapshot.documents, &self.menu, Some(self.rest_id), &self.images).await)
    }

    /// Rows for a change that already arrived, without waiting.
    pub async fn next_ready(&mut self) -> Option<Vec<OrderRow>> {
        let snapshot = self.subscription.try_next()?;
        Some(join_rows(&snapshot.documents, &self.menu, Some(self.rest_id), &self.images).await)
    }

    /// Release the subscription.
    pub fn close(self) {
        self.subscription.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FoodId, MenuItemKey};
    use collection_actor::mock::{create_mock_client, expect_query, MockClient};

    fn line(key: u32, order_number: u32, food_id: u32) -> OrderLine {
        OrderLine {
            id: OrderLineKey(key),
            food_id: FoodId(food_id),
            rest_id: RestId(1),
            order_number: OrderNumber(order_number),
            status: OrderStatus::Unconfirmed,
        }
    }

    fn dish(food_id: u32, name: &str) -> MenuItem {
        MenuItem {
            id: MenuItemKey(food_id),
            food_id: FoodId(food_id),
            rest_id: RestId(1),
            food_name: name.into(),
            food_price: 50.0,
            food_picture: format!("p{food_id}"),
        }
    }

    #[tokio::test]
    async fn test_rows_sorted_with_placeholders() {
        let (client, mut receiver) = create_mock_client::<MenuItem>(10);
        let menu = MenuClient::new(client);

        let lines = vec![line(1, 5, 1), line(2, 0, 2), line(3, 2, 99)];
        let join = tokio::spawn(async move {
            join_rows(&lines, &menu, Some(RestId(1)), &ImageUrls::default()).await
        });

        let (filter, responder) = expect_query(&mut receiver).await.unwrap();
        assert_eq!(filter, MenuFilter::restaurant(RestId(1)));
        responder
            .send(Ok(vec![dish(1, "Pad Thai"), dish(2, "Green Curry")]))
            .unwrap();

        let rows = join.await.unwrap();
        let numbers: Vec<u32> = rows.iter().map(|r| r.order_number.0).collect();
        assert_eq!(numbers, vec![0, 2, 5]);
        assert_eq!(rows[0].food_name(), Some("Green Curry"));
        assert_eq!(rows[1].dish, None);
        assert_eq!(rows[1].image_url, None);
        assert_eq!(rows[2].action_label(), "Confirm");
    }

    #[tokio::test]
    async fn test_failed_menu_lookup_is_not_fatal() {
        let mut mock = MockClient::<MenuItem>::new();
        mock.expect_query()
            .return_err(collection_actor::FrameworkError::ActorClosed);

        let rows = join_rows(
            &[line(1, 1, 1)],
            &MenuClient::new(mock.client()),
            None,
            &ImageUrls::default(),
        )
        .await;
        assert_eq!(rows.len(), 1);
        assert!(rows[0].dish.is_none());
    }

    #[tokio::test]
    async fn test_desk_refuses_other_restaurants_lines() {
        let orders = MockClient::<OrderLine>::new();
        let menu = MockClient::<MenuItem>::new();
        let desk = StaffDesk::new(
            RestId(2),
            OrderClient::new(orders.client()),
            MenuClient::new(menu.client()),
            ImageUrls::default(),
        );

        let row = OrderRow {
            key: OrderLineKey(1),
            order_number: OrderNumber(1),
            rest_id: RestId(1),
            status: OrderStatus::Unconfirmed,
            dish: None,
            image_url: None,
        };
        assert!(matches!(
            desk.advance(&row).await,
            Err(AppError::Forbidden(_))
        ));
        orders.verify();
    }
}
