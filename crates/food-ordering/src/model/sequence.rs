use crate::model::{document_key, OrderNumber};
use serde::Serialize;

document_key!(
    /// Key of a document in the `orderSequence` collection.
    SequenceKey,
    "sequence"
);

/// Counter record that hands out order numbers.
///
/// The counter only moves forward. Each draw returns `max(last, observed) + 1`, where
/// `observed` is the highest `order_ID` the caller saw in `orderFood`, so numbers written
/// before the counter existed are never handed out again.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSequence {
    pub id: SequenceKey,
    pub last: OrderNumber,
}

impl OrderSequence {
    /// Draw the next number and remember it.
    pub fn draw(&mut self, observed: OrderNumber) -> OrderNumber {
        let next = self.last.max(observed).next();
        self.last = next;
        next
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SequenceCreate {
    /// Last number already in use.
    pub last: OrderNumber,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_skips_past_observed_numbers() {
        let mut sequence = OrderSequence {
            id: SequenceKey(1),
            last: OrderNumber(0),
        };
        assert_eq!(sequence.draw(OrderNumber(0)), OrderNumber(1));
        assert_eq!(sequence.draw(OrderNumber(0)), OrderNumber(2));
        assert_eq!(sequence.draw(OrderNumber(9)), OrderNumber(10));
        assert_eq!(sequence.draw(OrderNumber(3)), OrderNumber(11));
    }
}
