//! Order domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use order_desk_core::OrderId;

use super::customer::Customer;

/// An order submission.
///
/// The order borrows its customer rather than owning it: the caller keeps the
/// [`Customer`] and lends it to the order for as long as the order lives.
/// Placement appends to that customer's history through the borrow.
///
/// The expedite flag and the customer's history only change through
/// [`OrderService::place_order`](crate::OrderService::place_order); there is
/// no public way to mark an order placed:
///
/// ```compile_fail
/// use order_desk::Order;
/// use rust_decimal::Decimal;
///
/// let mut order = Order::new(Decimal::ZERO, None);
/// order.finalize_placement(true);
/// ```
#[derive(Debug)]
pub struct Order<'c> {
    /// Order ID. Must be [`OrderId::UNSAVED`] until the order is persisted.
    pub id: OrderId,
    /// Order total in the store currency.
    pub total_amount: Decimal,
    /// The customer placing the order.
    pub customer: Option<&'c mut Customer>,
    is_expedited: bool,
    is_placed: bool,
}

impl<'c> Order<'c> {
    /// Create an unsaved, non-expedited order.
    #[must_use]
    pub const fn new(total_amount: Decimal, customer: Option<&'c mut Customer>) -> Self {
        Self {
            id: OrderId::UNSAVED,
            total_amount,
            customer,
            is_expedited: false,
            is_placed: false,
        }
    }

    /// Whether the order ships expedited. Only set by a successful placement.
    #[must_use]
    pub const fn is_expedited(&self) -> bool {
        self.is_expedited
    }

    /// Whether the order has been placed. Placement happens at most once.
    #[must_use]
    pub const fn is_placed(&self) -> bool {
        self.is_placed
    }

    /// Shared view of the order's customer.
    #[must_use]
    pub fn customer(&self) -> Option<&Customer> {
        self.customer.as_deref()
    }

    /// Records the expedite decision and appends the order to its customer's
    /// history. Returns `None` without changing anything when the order has
    /// no customer. Callers must have validated the order first.
    pub(crate) fn finalize_placement(&mut self, expedited: bool) -> Option<PlacedOrder> {
        let customer = self.customer.as_deref_mut()?;
        self.is_expedited = expedited;
        self.is_placed = true;
        let placed = PlacedOrder {
            id: self.id,
            total_amount: self.total_amount,
            is_expedited: self.is_expedited,
        };
        customer.record_order(placed);
        Some(placed)
    }
}

/// An entry in a customer's order history.
///
/// Captures the order as it stood when it was placed. Compares equal to the
/// [`Order`] it was recorded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedOrder {
    /// Order ID at placement time.
    pub id: OrderId,
    /// Order total.
    pub total_amount: Decimal,
    /// Whether the order was expedited.
    pub is_expedited: bool,
}

impl From<&Order<'_>> for PlacedOrder {
    fn from(order: &Order<'_>) -> Self {
        Self {
            id: order.id,
            total_amount: order.total_amount,
            is_expedited: order.is_expedited,
        }
    }
}

impl PartialEq<Order<'_>> for PlacedOrder {
    fn eq(&self, other: &Order<'_>) -> bool {
        *self == Self::from(other)
    }
}
