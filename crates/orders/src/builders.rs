//! Test-data builders for customers and orders.
//!
//! Each builder starts from a valid baseline and lets a test override the
//! one field it cares about:
//!
//! ```rust,ignore
//! use order_desk::builders::{CustomerBuilder, OrderBuilder};
//!
//! let mut customer = CustomerBuilder::new().with_credit_rating(200).build();
//! let order = OrderBuilder::new().with_customer(&mut customer).build();
//! assert_eq!(order.customer().map(|c| c.credit_rating), Some(200));
//! ```
//!
//! Only available with the `test-support` feature.

use order_desk_core::builders::AddressBuilder;
use order_desk_core::{Address, CustomerId, OrderId};
use rust_decimal::Decimal;

use crate::models::{Customer, Order};

/// Builds a [`Customer`] that passes every placement rule by default.
///
/// Defaults: ID 1, "test first name" / "test last name", credit rating 1234,
/// total purchases 10.5 and a complete test address.
#[derive(Debug, Clone)]
#[must_use]
pub struct CustomerBuilder {
    id: CustomerId,
    first_name: String,
    last_name: String,
    home_address: Option<Address>,
    credit_rating: i32,
    total_purchases: Decimal,
}

impl Default for CustomerBuilder {
    fn default() -> Self {
        Self {
            id: CustomerId::new(1),
            first_name: "test first name".to_string(),
            last_name: "test last name".to_string(),
            home_address: Some(AddressBuilder::new().with_test_values().build()),
            credit_rating: 1234,
            total_purchases: Decimal::new(105, 1),
        }
    }
}

impl CustomerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = CustomerId::new(id);
        self
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn with_credit_rating(mut self, credit_rating: i32) -> Self {
        self.credit_rating = credit_rating;
        self
    }

    pub fn with_total_purchases(mut self, total_purchases: Decimal) -> Self {
        self.total_purchases = total_purchases;
        self
    }

    pub fn with_home_address(mut self, home_address: Address) -> Self {
        self.home_address = Some(home_address);
        self
    }

    pub fn without_home_address(mut self) -> Self {
        self.home_address = None;
        self
    }

    pub fn build(self) -> Customer {
        let mut customer = Customer::new(self.id);
        customer.first_name = self.first_name;
        customer.last_name = self.last_name;
        customer.home_address = self.home_address;
        customer.credit_rating = self.credit_rating;
        customer.total_purchases = self.total_purchases;
        customer
    }
}

/// Builds an [`Order`].
///
/// Defaults: unsaved ID, total amount 100.8 and no customer. The customer is
/// borrowed, so build it first and lend it with
/// [`with_customer`](Self::with_customer).
#[derive(Debug)]
#[must_use]
pub struct OrderBuilder<'c> {
    id: OrderId,
    total_amount: Decimal,
    customer: Option<&'c mut Customer>,
}

impl Default for OrderBuilder<'_> {
    fn default() -> Self {
        Self {
            id: OrderId::UNSAVED,
            total_amount: Decimal::new(1008, 1),
            customer: None,
        }
    }
}

impl<'c> OrderBuilder<'c> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = OrderId::new(id);
        self
    }

    pub fn with_total_amount(mut self, total_amount: Decimal) -> Self {
        self.total_amount = total_amount;
        self
    }

    pub fn with_customer(mut self, customer: &'c mut Customer) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn without_customer(mut self) -> Self {
        self.customer = None;
        self
    }

    pub fn build(self) -> Order<'c> {
        let mut order = Order::new(self.total_amount, self.customer);
        order.id = self.id;
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_builder_defaults() {
        let customer = CustomerBuilder::new().build();
        assert_eq!(customer.id(), CustomerId::new(1));
        assert_eq!(customer.first_name, "test first name");
        assert_eq!(customer.last_name, "test last name");
        assert_eq!(customer.credit_rating, 1234);
        assert_eq!(customer.total_purchases, Decimal::new(105, 1));
        assert!(customer.home_address.is_some());
        assert!(customer.order_history().is_empty());
    }

    #[test]
    fn test_customer_builder_without_home_address() {
        let customer = CustomerBuilder::new().without_home_address().build();
        assert!(customer.home_address.is_none());
    }

    #[test]
    fn test_order_builder_defaults() {
        let order = OrderBuilder::new().build();
        assert!(order.id.is_unsaved());
        assert_eq!(order.total_amount, Decimal::new(1008, 1));
        assert!(order.customer().is_none());
        assert!(!order.is_expedited());
        assert!(!order.is_placed());
    }

    #[test]
    fn test_order_builder_overrides() {
        let mut customer = CustomerBuilder::new().with_id(7).build();
        let order = OrderBuilder::new()
            .with_id(123)
            .with_total_amount(Decimal::new(99, 0))
            .with_customer(&mut customer)
            .build();
        assert_eq!(order.id, OrderId::new(123));
        assert_eq!(order.total_amount, Decimal::new(99, 0));
        assert_eq!(order.customer().map(Customer::id), Some(CustomerId::new(7)));
    }
}
