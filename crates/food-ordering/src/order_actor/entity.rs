//! Document trait implementation for the OrderLine domain type.
//!
//! The status machine lives on [`OrderStatus::advance`]; this impl applies it and tells the
//! collection to retire the line once the food is picked up.

use crate::model::{OrderFilter, OrderLine, OrderLineCreate, OrderLineKey, ReadOnly, Transition};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use collection_actor::Document;

#[async_trait]
impl Document for OrderLine {
    type Id = OrderLineKey;
    type Create = OrderLineCreate;
    type Update = ReadOnly;
    type Filter = OrderFilter;
    type Action = OrderAction;
    type ActionResult = Transition;
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: OrderLineKey, params: OrderLineCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            food_id: params.food_id,
            rest_id: params.rest_id,
            order_number: params.order_number,
            status: params.status,
        })
    }

    fn id(&self) -> &OrderLineKey {
        &self.id
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        filter.rest_id.map_or(true, |rest_id| rest_id == self.rest_id)
            && filter
                .order_number
                .map_or(true, |number| number == self.order_number)
    }

    async fn on_update(&mut self, update: ReadOnly, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &(),
    ) -> Result<Transition, Self::Error> {
        match action {
            OrderAction::Advance { rest_id } if rest_id != self.rest_id => {
                Err(OrderError::WrongRestaurant {
                    owner: self.rest_id,
                    requested: rest_id,
                })
            }
            OrderAction::Advance { .. } => Ok(match self.status.advance() {
                Some(status) => {
                    self.status = status;
                    Transition::Advanced {
                        order_number: self.order_number,
                        status,
                    }
                }
                None => Transition::PickedUp {
                    order_number: self.order_number,
                },
            }),
        }
    }

    fn retires_after(result: &Transition) -> bool {
        matches!(result, Transition::PickedUp { .. })
    }
}
