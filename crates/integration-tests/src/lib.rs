//! Integration tests for Order Desk.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p order-desk-integration-tests
//!
//! # With placement logs
//! RUST_LOG=order_desk=debug cargo test -p order-desk-integration-tests -- --nocapture
//! ```
//!
//! # Test Categories
//!
//! - `place_order_validation` - Every rejection rule and the order rules are checked in
//! - `place_order_success` - Successful placements, order history and the expedite decision
