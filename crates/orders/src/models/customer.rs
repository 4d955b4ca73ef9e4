//! Customer domain type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use order_desk_core::{Address, CustomerId};

use super::order::PlacedOrder;

/// A customer placing orders.
///
/// The ID is fixed at construction. The order history is append-only and
/// only grows through [`OrderService::place_order`](crate::OrderService::place_order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    /// Given name (required, non-blank).
    pub first_name: String,
    /// Family name (required, non-blank).
    pub last_name: String,
    /// Home address (required for placement).
    pub home_address: Option<Address>,
    /// Credit rating score.
    pub credit_rating: i32,
    /// Lifetime purchase total in the store currency.
    pub total_purchases: Decimal,
    #[serde(default)]
    order_history: Vec<PlacedOrder>,
}

impl Customer {
    /// Create a customer with the given ID and every other field empty.
    #[must_use]
    pub const fn new(id: CustomerId) -> Self {
        Self {
            id,
            first_name: String::new(),
            last_name: String::new(),
            home_address: None,
            credit_rating: 0,
            total_purchases: Decimal::ZERO,
            order_history: Vec::new(),
        }
    }

    /// The customer's ID.
    #[must_use]
    pub const fn id(&self) -> CustomerId {
        self.id
    }

    /// Orders placed by this customer, oldest first.
    #[must_use]
    pub fn order_history(&self) -> &[PlacedOrder] {
        &self.order_history
    }

    pub(crate) fn record_order(&mut self, order: PlacedOrder) {
        self.order_history.push(order);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use order_desk_core::OrderId;

    use super::*;
    use crate::builders::CustomerBuilder;

    #[test]
    fn test_new_customer_is_empty() {
        let customer = Customer::new(CustomerId::new(9));
        assert_eq!(customer.id(), CustomerId::new(9));
        assert!(customer.first_name.is_empty());
        assert!(customer.home_address.is_none());
        assert_eq!(customer.total_purchases, Decimal::ZERO);
        assert!(customer.order_history().is_empty());
    }

    #[test]
    fn test_record_order_appends_in_order() {
        let mut customer = CustomerBuilder::new().build();
        let first = PlacedOrder {
            id: OrderId::UNSAVED,
            total_amount: Decimal::new(1008, 1),
            is_expedited: false,
        };
        let second = PlacedOrder {
            total_amount: Decimal::new(250, 0),
            ..first
        };

        customer.record_order(first);
        customer.record_order(second);

        assert_eq!(customer.order_history(), &[first, second]);
    }

    #[test]
    fn test_deserialize_without_history() {
        let json = r#"{
            "id": 3,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "home_address": null,
            "credit_rating": 700,
            "total_purchases": "12.50"
        }"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.id(), CustomerId::new(3));
        assert_eq!(customer.total_purchases, Decimal::new(1250, 2));
        assert!(customer.order_history().is_empty());
    }
}
