//! # Order Submission
//!
//! Turns the cart into order lines.
//!
//! 1. Reject an empty cart.
//! 2. Draw the order number from the sequence, never below the highest stored `order_ID`.
//! 3. Write one `Unconfirmed` line per cart entry in a single all-or-nothing batch.
//! 4. Take the ordered entries out of the cart and send the customer to the status screen.
//!    Entries added while the order was being written stay for the next order.
//!
//! If any step fails the cart is left as it was.

use crate::cart::Cart;
use crate::clients::{OrderClient, SequenceClient};
use crate::error::AppError;
use crate::model::{OrderLineCreate, OrderLineKey, OrderNumber, OrderStatus};
use crate::notice::{Notice, Screen};
use tracing::{info, instrument, warn};

/// Outcome of a successful checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub order_number: OrderNumber,
    pub lines: Vec<OrderLineKey>,
    pub notice: Notice,
    pub navigate_to: Screen,
}

#[derive(Clone)]
pub struct Checkout {
    orders: OrderClient,
    sequence: SequenceClient,
    cart: Cart,
}

impl Checkout {
    pub fn new(orders: OrderClient, sequence: SequenceClient, cart: Cart) -> Self {
        Self {
            orders,
            sequence,
            cart,
        }
    }

    #[instrument(skip(self))]
    pub async fn submit(&self) -> Result<Receipt, AppError> {
        let entries = self.cart.entries();
        if entries.is_empty() {
            warn!("Checkout with empty cart");
            return Err(AppError::EmptyCart);
        }

        let observed = self.orders.max_order_number().await?;
        let order_number = self.sequence.next(observed).await?;

        let batch = entries
            .iter()
            .map(|item| OrderLineCreate {
                food_id: item.food_id,
                rest_id: item.rest_id,
                order_number,
                status: OrderStatus::Unconfirmed,
            })
            .collect();
        let lines = self.orders.place(batch).await?;

        // Dishes added while the order was being written stay in the cart
        self.cart.remove_ordered(&entries);
        info!(%order_number, count = lines.len(), "Order submitted");

        Ok(Receipt {
            order_number,
            lines,
            notice: Notice::OrderConfirmed { order_number },
            navigate_to: Screen::Status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FoodId, MenuItem, MenuItemKey, OrderLine, RestId};
    use crate::sequence_actor;
    use collection_actor::mock::{create_mock_client, expect_create_batch, expect_query, MockClient};
    use collection_actor::FrameworkError;

    async fn sequence() -> SequenceClient {
        let (actor, client) = sequence_actor::new(8);
        tokio::spawn(actor.run(()));
        SequenceClient::open(client, OrderNumber(0)).await.unwrap()
    }

    fn pad_thai() -> MenuItem {
        MenuItem {
            id: MenuItemKey(1),
            food_id: FoodId(1),
            rest_id: RestId(1),
            food_name: "Pad Thai".into(),
            food_price: 50.0,
            food_picture: String::new(),
        }
    }

    #[tokio::test]
    async fn test_empty_cart_is_rejected_without_store_traffic() {
        let orders = MockClient::<OrderLine>::new();
        let checkout = Checkout::new(OrderClient::new(orders.client()), sequence().await, Cart::new());

        assert!(matches!(checkout.submit().await, Err(AppError::EmptyCart)));
        orders.verify();
    }

    #[tokio::test]
    async fn test_failed_write_keeps_the_cart() {
        let mut orders = MockClient::<OrderLine>::new();
        orders.expect_query().return_ok(vec![]);
        orders
            .expect_create_batch()
            .return_err(FrameworkError::ActorDropped);

        let cart = Cart::new();
        cart.add(pad_thai());
        let checkout = Checkout::new(OrderClient::new(orders.client()), sequence().await, cart.clone());

        assert!(matches!(checkout.submit().await, Err(AppError::Io(_))));
        assert_eq!(cart.len(), 1);
        orders.verify();
    }

    #[tokio::test]
    async fn test_dish_added_during_submit_stays_in_cart() {
        let (client, mut receiver) = create_mock_client::<OrderLine>(10);
        let cart = Cart::new();
        cart.add(pad_thai());
        let checkout = Checkout::new(OrderClient::new(client), sequence().await, cart.clone());
        let task = tokio::spawn(async move { checkout.submit().await });

        let (_, responder) = expect_query(&mut receiver)
            .await
            .expect("Expected Query request");
        let tom_yum = MenuItem {
            id: MenuItemKey(3),
            food_id: FoodId(3),
            food_name: "Tom Yum".into(),
            food_price: 80.0,
            ..pad_thai()
        };
        cart.add(tom_yum.clone());
        responder.send(Ok(vec![])).unwrap();

        let (batch, responder) = expect_create_batch(&mut receiver)
            .await
            .expect("Expected CreateBatch request");
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].food_id, FoodId(1));
        responder.send(Ok(vec![OrderLineKey(1)])).unwrap();

        let receipt = task.await.unwrap().unwrap();
        assert_eq!(receipt.order_number, OrderNumber(1));
        assert_eq!(cart.entries(), vec![tom_yum]);
    }
}
