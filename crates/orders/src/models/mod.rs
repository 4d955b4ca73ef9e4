//! Domain models placed by the ordering service.

pub mod customer;
pub mod order;

pub use customer::Customer;
pub use order::{Order, PlacedOrder};
