//! # Order Client
//!
//! Provides a high‑level API for interacting with the `OrderLine` actor: placing a checkout's
//! lines in one write, advancing a line, and watching lines live.
use crate::model::{
    OrderFilter, OrderLine, OrderLineCreate, OrderLineKey, OrderNumber, RestId, Transition,
};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use collection_actor::{CollectionClient, DocumentClient, FrameworkError, Subscription};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: CollectionClient<OrderLine>,
}

impl OrderClient {
    pub fn new(inner: CollectionClient<OrderLine>) -> Self {
        Self { inner }
    }

    /// Write every line of one checkout, or none of them.
    #[instrument(skip(self, lines), fields(count = lines.len()))]
    pub async fn place(&self, lines: Vec<OrderLineCreate>) -> Result<Vec<OrderLineKey>, OrderError> {
        debug!("Sending request");
        let keys = self
            .inner
            .create_batch(lines)
            .await
            .map_err(OrderError::from)?;
        info!(count = keys.len(), "Order lines placed");
        Ok(keys)
    }

    /// Move a line one step along its status machine, on behalf of `rest_id`'s staff.
    #[instrument(skip(self))]
    pub async fn advance(
        &self,
        key: OrderLineKey,
        rest_id: RestId,
    ) -> Result<Transition, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(key, OrderAction::Advance { rest_id })
            .await
            .map_err(OrderError::from)
    }

    /// Highest `order_ID` currently stored, `0` when there are no orders.
    #[instrument(skip(self))]
    pub async fn max_order_number(&self) -> Result<OrderNumber, OrderError> {
        let lines = self.query(OrderFilter::default()).await?;
        Ok(lines
            .iter()
            .map(|line| line.order_number)
            .max()
            .unwrap_or_default())
    }

    /// Live view of the lines matching `filter`.
    #[instrument(skip(self))]
    pub async fn watch(&self, filter: OrderFilter) -> Result<Subscription<OrderLine>, OrderError> {
        debug!("Sending request");
        self.inner.subscribe(filter).await.map_err(OrderError::from)
    }
}

#[async_trait]
impl DocumentClient<OrderLine> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &CollectionClient<OrderLine> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FoodId, OrderStatus};
    use collection_actor::mock::{create_mock_client, expect_action, MockClient};

    fn line(number: u32) -> OrderLine {
        OrderLine {
            id: OrderLineKey(number),
            food_id: FoodId(1),
            rest_id: RestId(1),
            order_number: OrderNumber(number),
            status: OrderStatus::Unconfirmed,
        }
    }

    #[tokio::test]
    async fn test_advance_sends_advance_action() {
        let (client, mut receiver) = create_mock_client::<OrderLine>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move { order_client.advance(OrderLineKey(3), RestId(1)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, OrderLineKey(3));
        assert_eq!(action, OrderAction::Advance { rest_id: RestId(1) });
        responder
            .send(Ok(Transition::Advanced {
                order_number: OrderNumber(8),
                status: OrderStatus::PreparingFood,
            }))
            .unwrap();

        let transition = task.await.unwrap().unwrap();
        assert_eq!(
            transition,
            Transition::Advanced {
                order_number: OrderNumber(8),
                status: OrderStatus::PreparingFood,
            }
        );
    }

    #[tokio::test]
    async fn test_advance_on_picked_up_line_is_not_found() {
        let mut mock = MockClient::<OrderLine>::new();
        mock.expect_action(OrderLineKey(3))
            .return_err(FrameworkError::NotFound("order_line_3".into()));

        let order_client = OrderClient::new(mock.client());
        let result = order_client.advance(OrderLineKey(3), RestId(1)).await;
        assert_eq!(result, Err(OrderError::NotFound("order_line_3".into())));
        mock.verify();
    }

    #[tokio::test]
    async fn test_max_order_number_defaults_to_zero() {
        let mut mock = MockClient::<OrderLine>::new();
        mock.expect_query().return_ok(vec![]);
        mock.expect_query().return_ok(vec![line(3), line(11), line(7)]);

        let order_client = OrderClient::new(mock.client());
        assert_eq!(order_client.max_order_number().await.unwrap(), OrderNumber(0));
        assert_eq!(order_client.max_order_number().await.unwrap(), OrderNumber(11));
        mock.verify();
    }
}
