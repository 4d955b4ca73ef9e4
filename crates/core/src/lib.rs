//! Order Desk Core - Shared types library.
//!
//! This crate provides the primitive types the ordering crates build on:
//! - [`CustomerId`] / [`OrderId`] - Type-safe entity IDs
//! - [`Address`] - A customer's postal address and its required fields
//! - [`is_blank`] - The empty-or-whitespace check used by every rule
//!
//! # Architecture
//!
//! The core crate contains only types - no validation pipeline, no I/O. The
//! customer and order models and the placement rules live in the
//! `order-desk` crate.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, addresses and text helpers
//! - `builders` - Address test-data builder (requires the `test-support` feature)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

#[cfg(any(test, feature = "test-support"))]
pub mod builders;

pub use types::*;
