//! Integer identifiers for customers and orders.
//!
//! Both kinds of ID are plain `i32` values in storage. Wrapping each in its
//! own type keeps a customer ID from being passed where an order ID is
//! expected.

/// Declares an `i32`-backed identifier type.
///
/// Outer attributes (doc comments included) are forwarded to the generated
/// struct. The type serializes as a bare integer, prints as its number and
/// converts to and from `i32`.
///
/// ```rust
/// # use order_desk_core::define_id;
/// define_id!(
///     /// Identifies a warehouse.
///     WarehouseId
/// );
///
/// let id = WarehouseId::from(12);
/// assert_eq!(id.as_i32(), 12);
/// assert_eq!(id.to_string(), "12");
/// ```
#[macro_export]
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        #[derive(::serde::Serialize, ::serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wraps a raw value.
            #[must_use]
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// The raw value.
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::core::convert::From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl ::core::convert::From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// Identifies a customer. Persisted customers have a positive ID.
    CustomerId
);
define_id!(
    /// Identifies an order. Zero until the order is persisted.
    OrderId
);

impl OrderId {
    /// The ID carried by an order that has not been persisted yet.
    pub const UNSAVED: Self = Self(0);

    /// Whether this order has not been persisted yet.
    #[must_use]
    pub const fn is_unsaved(&self) -> bool {
        self.0 == 0
    }
}

impl CustomerId {
    /// Whether this ID could refer to a persisted customer (strictly positive).
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.0 > 0
    }
}
