//! Placement failures.
//!
//! Every rejection is one of four kinds, each carrying a fixed message that
//! callers may show verbatim:
//!
//! | Kind | Raised for |
//! |------|------------|
//! | [`InvalidOrder`] | Order already has an ID, total below the minimum, no customer |
//! | [`InvalidCustomer`] | Customer ID, address, names or purchase total invalid |
//! | [`InvalidAddress`] | A required address field is blank |
//! | [`InsufficientCredit`] | Credit rating at or below the policy minimum |

use core::fmt;

use order_desk_core::AddressField;
use thiserror::Error;

/// Error returned by [`OrderService::place_order`](crate::OrderService::place_order).
///
/// `Display` yields the rule's message, e.g. `"Order ID must be 0."`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceOrderError {
    #[error(transparent)]
    InvalidOrder(#[from] InvalidOrder),

    #[error(transparent)]
    InvalidCustomer(#[from] InvalidCustomer),

    #[error(transparent)]
    InvalidAddress(#[from] InvalidAddress),

    #[error(transparent)]
    InsufficientCredit(#[from] InsufficientCredit),
}

impl PlaceOrderError {
    /// The category of rule that was violated.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidOrder(_) => ErrorKind::InvalidOrder,
            Self::InvalidCustomer(_) => ErrorKind::InvalidCustomer,
            Self::InvalidAddress(_) => ErrorKind::InvalidAddress,
            Self::InsufficientCredit(_) => ErrorKind::InsufficientCredit,
        }
    }
}

/// Problems with the order itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidOrder {
    /// The order already carries a persisted ID.
    #[error("Order ID must be 0.")]
    IdAlreadyAssigned,

    /// The total is below the minimum order amount.
    // Historical wording: the rule is a minimum amount, not "> 0".
    #[error("order amount must be greater than zero.")]
    AmountBelowMinimum,

    #[error("order must have a customer.")]
    MissingCustomer,

    /// The order was already placed and is in its customer's history.
    #[error("order has already been placed.")]
    AlreadyPlaced,
}

/// Data-integrity problems with the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidCustomer {
    #[error("customer must have an ID > 0.")]
    IdNotPositive,

    #[error("customer must have an address.")]
    MissingAddress,

    #[error("customer must have a first name.")]
    MissingFirstName,

    #[error("customer must have a last name.")]
    MissingLastName,

    #[error("customer must have total purchases >= 0.")]
    NegativeTotalPurchases,
}

/// A required address field is blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field} is required.")]
pub struct InvalidAddress {
    /// The first blank field found.
    pub field: AddressField,
}

/// The customer's credit rating does not clear the policy minimum.
///
/// Kept apart from [`InvalidCustomer`]: the data is fine, the business
/// declines the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("customer must have credit rating > {minimum}.")]
pub struct InsufficientCredit {
    /// The customer's rating.
    pub credit_rating: i32,
    /// The exclusive minimum the rating had to exceed.
    pub minimum: i32,
}

/// Tag identifying which kind of rule a [`PlaceOrderError`] violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidOrder,
    InvalidCustomer,
    InvalidAddress,
    InsufficientCredit,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidOrder => "InvalidOrder",
            Self::InvalidCustomer => "InvalidCustomer",
            Self::InvalidAddress => "InvalidAddress",
            Self::InsufficientCredit => "InsufficientCredit",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
