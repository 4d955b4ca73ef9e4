//! Core types for Order Desk.
//!
//! Typed IDs, the postal address and the blank-text check shared by the
//! ordering crates.

pub mod address;
pub mod id;
pub mod text;

pub use address::{Address, AddressField};
pub use id::*;
pub use text::is_blank;
