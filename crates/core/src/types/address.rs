//! Postal address type.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::text::is_blank;

/// A customer's home address.
///
/// Addresses have no identity of their own; each one is owned by exactly one
/// customer. An absent required field is an empty string
/// and is treated the same as a whitespace-only one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    /// First street line (required).
    pub street1: String,
    /// Second street line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    /// Third street line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street3: Option<String>,
    /// City (required).
    pub city: String,
    /// State or province (required).
    pub state: String,
    /// Postal or ZIP code (required).
    pub postal_code: String,
    /// Country (required).
    pub country: String,
}

impl Address {
    /// Returns the value of a required field.
    #[must_use]
    pub fn field(&self, field: AddressField) -> &str {
        match field {
            AddressField::Street1 => &self.street1,
            AddressField::City => &self.city,
            AddressField::State => &self.state,
            AddressField::PostalCode => &self.postal_code,
            AddressField::Country => &self.country,
        }
    }

    /// Returns the first required field that is blank, in
    /// [`AddressField::REQUIRED`] order.
    ///
    /// ```
    /// use order_desk_core::{Address, AddressField};
    ///
    /// let address = Address {
    ///     street1: "1 Main St".to_string(),
    ///     city: " ".to_string(),
    ///     ..Address::default()
    /// };
    /// assert_eq!(address.missing_field(), Some(AddressField::City));
    /// ```
    #[must_use]
    pub fn missing_field(&self) -> Option<AddressField> {
        AddressField::REQUIRED
            .into_iter()
            .find(|&field| is_blank(self.field(field)))
    }
}

/// The required components of an [`Address`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressField {
    Street1,
    City,
    State,
    PostalCode,
    Country,
}

impl AddressField {
    /// Required fields in the order they are checked.
    pub const REQUIRED: [Self; 5] = [
        Self::Street1,
        Self::City,
        Self::State,
        Self::PostalCode,
        Self::Country,
    ];

    /// Human-readable field name used in validation messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Street1 => "street1",
            Self::City => "city",
            Self::State => "state",
            Self::PostalCode => "postal code",
            Self::Country => "country",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::builders::AddressBuilder;

    #[test]
    fn test_complete_address_has_no_missing_field() {
        let address = AddressBuilder::new().with_test_values().build();
        assert_eq!(address.missing_field(), None);
    }

    #[test]
    fn test_empty_address_reports_street1_first() {
        assert_eq!(
            Address::default().missing_field(),
            Some(AddressField::Street1)
        );
    }

    #[test]
    fn test_missing_field_follows_required_order() {
        let address = AddressBuilder::new()
            .with_test_values()
            .with_state("")
            .with_country("  ")
            .build();
        assert_eq!(address.missing_field(), Some(AddressField::State));
    }

    #[test]
    fn test_optional_streets_are_not_required() {
        let address = AddressBuilder::new()
            .with_test_values()
            .with_street2("")
            .build();
        assert_eq!(address.missing_field(), None);
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(AddressField::Street1.to_string(), "street1");
        assert_eq!(AddressField::PostalCode.to_string(), "postal code");
        assert_eq!(AddressField::Country.label(), "country");
    }

    #[test]
    fn test_serde_omits_empty_optional_streets() {
        let address = Address {
            street1: "1 Main St".to_string(),
            ..Address::default()
        };
        let json = serde_json::to_value(&address).unwrap();
        assert!(json.get("street2").is_none());

        let parsed: Address = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, address);
    }
}
