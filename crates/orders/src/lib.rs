//! Order Desk - Order placement.
//!
//! Validates an [`Order`] together with its customer
//! and address, decides whether it ships expedited, and records it in the
//! customer's order history.
//!
//! ```rust
//! use order_desk::{Customer, Order, OrderService};
//! use order_desk_core::{Address, CustomerId};
//! use rust_decimal::Decimal;
//!
//! let mut customer = Customer::new(CustomerId::new(1));
//! customer.first_name = "Ada".to_string();
//! customer.last_name = "Lovelace".to_string();
//! customer.credit_rating = 650;
//! customer.home_address = Some(Address {
//!     street1: "12 Analytical Row".to_string(),
//!     city: "London".to_string(),
//!     state: "Greater London".to_string(),
//!     postal_code: "W1".to_string(),
//!     country: "UK".to_string(),
//!     ..Address::default()
//! });
//!
//! let mut order = Order::new(Decimal::new(15000, 2), Some(&mut customer));
//! OrderService::default().place_order(&mut order)?;
//! assert!(!order.is_expedited());
//!
//! assert_eq!(customer.order_history().len(), 1);
//! # Ok::<(), order_desk::PlaceOrderError>(())
//! ```
//!
//! # Modules
//!
//! - [`models`] - Customers, orders and history entries
//! - [`service`] - The placement pipeline
//! - [`error`] - Rejection kinds and their messages
//! - [`config`] - Policy thresholds, loadable from the environment
//! - `builders` - Customer and order test-data builders (requires the `test-support` feature)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod models;
pub mod service;

#[cfg(any(test, feature = "test-support"))]
pub mod builders;

pub use config::{ConfigError, PlacementPolicy};
pub use error::{
    ErrorKind, InsufficientCredit, InvalidAddress, InvalidCustomer, InvalidOrder, PlaceOrderError,
};
pub use models::{Customer, Order, PlacedOrder};
pub use service::OrderService;
