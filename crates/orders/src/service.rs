//! Order placement service.
//!
//! Placement is a single validate-then-mutate step:
//! 1. Validate the order, then its customer, then the customer's address,
//!    stopping at the first rule violated
//! 2. Decide whether the order ships expedited
//! 3. Append the order to the customer's history
//!
//! A rejected order leaves both the order and the customer untouched. An
//! order is placed at most once; placing it again is rejected.

use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

use order_desk_core::{Address, is_blank};

use crate::config::PlacementPolicy;
use crate::error::{
    InsufficientCredit, InvalidAddress, InvalidCustomer, InvalidOrder, PlaceOrderError,
};
use crate::models::{Customer, Order};

/// Validates and places orders.
#[derive(Debug, Clone, Default)]
pub struct OrderService {
    policy: PlacementPolicy,
}

impl OrderService {
    /// Create a service applying the given policy.
    #[must_use]
    pub const fn new(policy: PlacementPolicy) -> Self {
        Self { policy }
    }

    /// The thresholds this service applies.
    #[must_use]
    pub const fn policy(&self) -> &PlacementPolicy {
        &self.policy
    }

    /// Place an order.
    ///
    /// On success the order's expedite flag is decided and the order is
    /// appended to its customer's history.
    ///
    /// # Errors
    ///
    /// Returns the first rule violated, in this order: order ID, already
    /// placed, order total, customer presence, customer ID, home address
    /// presence, first name, last name, credit rating, purchase total, then
    /// each required address field.
    /// Nothing is mutated on error.
    #[instrument(
        skip_all,
        fields(
            order_id = %order.id,
            total_amount = %order.total_amount,
            customer_id = order.customer().map(|c| c.id().as_i32()),
        )
    )]
    pub fn place_order(&self, order: &mut Order<'_>) -> Result<(), PlaceOrderError> {
        if let Err(error) = self.validate(order) {
            warn!(kind = %error.kind(), %error, "Order rejected");
            return Err(error);
        }

        let expedited = order
            .customer()
            .is_some_and(|customer| self.qualifies_for_expedite(customer));

        let Some(placed) = order.finalize_placement(expedited) else {
            return Err(InvalidOrder::MissingCustomer.into());
        };

        info!(
            expedited = placed.is_expedited,
            history_len = order.customer().map_or(0, |c| c.order_history().len()),
            "Order placed"
        );

        Ok(())
    }

    /// Run every placement rule without changing anything.
    ///
    /// # Errors
    ///
    /// Returns the same error [`place_order`](Self::place_order) would.
    pub fn validate(&self, order: &Order<'_>) -> Result<(), PlaceOrderError> {
        if !order.id.is_unsaved() {
            return Err(InvalidOrder::IdAlreadyAssigned.into());
        }
        if order.is_placed() {
            return Err(InvalidOrder::AlreadyPlaced.into());
        }
        if order.total_amount < self.policy.min_total_amount {
            return Err(InvalidOrder::AmountBelowMinimum.into());
        }
        let customer = order.customer().ok_or(InvalidOrder::MissingCustomer)?;
        self.validate_customer(customer)
    }

    fn validate_customer(&self, customer: &Customer) -> Result<(), PlaceOrderError> {
        if !customer.id().is_assigned() {
            return Err(InvalidCustomer::IdNotPositive.into());
        }
        let address = customer
            .home_address
            .as_ref()
            .ok_or(InvalidCustomer::MissingAddress)?;
        if is_blank(&customer.first_name) {
            return Err(InvalidCustomer::MissingFirstName.into());
        }
        if is_blank(&customer.last_name) {
            return Err(InvalidCustomer::MissingLastName.into());
        }
        if customer.credit_rating <= self.policy.min_credit_rating {
            return Err(InsufficientCredit {
                credit_rating: customer.credit_rating,
                minimum: self.policy.min_credit_rating,
            }
            .into());
        }
        if customer.total_purchases < Decimal::ZERO {
            return Err(InvalidCustomer::NegativeTotalPurchases.into());
        }
        validate_address(address)
    }

    /// Both thresholds are exclusive.
    fn qualifies_for_expedite(&self, customer: &Customer) -> bool {
        let qualifies = customer.total_purchases > self.policy.expedite_min_total_purchases
            && customer.credit_rating > self.policy.expedite_min_credit_rating;
        debug!(
            total_purchases = %customer.total_purchases,
            credit_rating = customer.credit_rating,
            qualifies,
            "Expedite check"
        );
        qualifies
    }
}

fn validate_address(address: &Address) -> Result<(), PlaceOrderError> {
    match address.missing_field() {
        Some(field) => Err(InvalidAddress { field }.into()),
        None => Ok(()),
    }
}
