//! Document trait implementation for the order-number counter.

use crate::model::{OrderNumber, OrderSequence, ReadOnly, SequenceCreate, SequenceKey};
use crate::order_actor::OrderError;
use crate::sequence_actor::SequenceAction;
use async_trait::async_trait;
use collection_actor::Document;

#[async_trait]
impl Document for OrderSequence {
    type Id = SequenceKey;
    type Create = SequenceCreate;
    type Update = ReadOnly;
    type Filter = ();
    type Action = SequenceAction;
    type ActionResult = OrderNumber;
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: SequenceKey, params: SequenceCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            last: params.last,
        })
    }

    fn id(&self) -> &SequenceKey {
        &self.id
    }

    fn matches(&self, _filter: &()) -> bool {
        true
    }

    async fn on_update(&mut self, update: ReadOnly, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: SequenceAction,
        _ctx: &(),
    ) -> Result<OrderNumber, Self::Error> {
        match action {
            SequenceAction::Next { observed } => Ok(self.draw(observed)),
        }
    }
}
