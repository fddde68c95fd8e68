//! # Sequence Client
//!
//! Hands out order numbers from the single counter document of the `orderSequence`
//! collection.
use crate::model::{OrderNumber, OrderSequence, SequenceCreate, SequenceKey};
use crate::order_actor::OrderError;
use crate::sequence_actor::SequenceAction;
use collection_actor::CollectionClient;
use tracing::{debug, info, instrument};

/// Client for the order-number counter.
#[derive(Clone)]
pub struct SequenceClient {
    inner: CollectionClient<OrderSequence>,
    counter: SequenceKey,
}

impl SequenceClient {
    /// Create the counter document, starting after `last`.
    #[instrument(skip(inner))]
    pub async fn open(
        inner: CollectionClient<OrderSequence>,
        last: OrderNumber,
    ) -> Result<Self, OrderError> {
        let counter = inner
            .create(SequenceCreate { last })
            .await
            .map_err(OrderError::from)?;
        info!(%counter, "Order sequence opened");
        Ok(Self { inner, counter })
    }

    /// Draw the next order number, never lower than `observed + 1`.
    #[instrument(skip(self))]
    pub async fn next(&self, observed: OrderNumber) -> Result<OrderNumber, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(self.counter, SequenceAction::Next { observed })
            .await
            .map_err(OrderError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence_actor;

    #[tokio::test]
    async fn test_concurrent_draws_never_collide() {
        let (actor, client) = sequence_actor::new(16);
        tokio::spawn(actor.run(()));
        let sequence = SequenceClient::open(client, OrderNumber(4)).await.unwrap();

        let mut handles = vec![];
        for _ in 0..10 {
            let sequence = sequence.clone();
            handles.push(tokio::spawn(async move {
                sequence.next(OrderNumber(4)).await
            }));
        }

        let mut numbers = vec![];
        for handle in handles {
            numbers.push(handle.await.unwrap().unwrap().0);
        }
        numbers.sort_unstable();
        assert_eq!(numbers, (5..=14).collect::<Vec<u32>>());
    }
}
