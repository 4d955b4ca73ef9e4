//! Shared helpers for the placement integration tests.

#![allow(dead_code)]

use order_desk::{ErrorKind, Order, OrderService};
use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber once per test binary.
///
/// Honours `RUST_LOG`; defaults to `debug` for the order crates.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("order_desk=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// A service with the default policy.
pub fn service() -> OrderService {
    init_tracing();
    OrderService::default()
}

/// Place `order` and assert it is rejected with `kind` and `message`,
/// leaving the order and its customer's history untouched.
pub fn assert_rejected(order: &mut Order<'_>, kind: ErrorKind, message: &str) {
    let history_len = order.customer().map(|c| c.order_history().len());

    let err = service()
        .place_order(order)
        .expect_err("placement should be rejected");

    assert_eq!(err.kind(), kind);
    assert_eq!(err.to_string(), message);
    assert!(!order.is_expedited(), "rejected order must not be expedited");
    assert_eq!(
        order.customer().map(|c| c.order_history().len()),
        history_len,
        "rejected order must not reach the history"
    );
}
