//! Test-data builder for addresses.
//!
//! Only available with the `test-support` feature.

use crate::Address;

/// Builds an [`Address`].
///
/// Starts empty; call [`with_test_values`](Self::with_test_values) for a
/// complete address.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct AddressBuilder {
    address: Address,
}

impl AddressBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill every field with a non-blank placeholder.
    pub fn with_test_values(mut self) -> Self {
        self.address = Address {
            street1: "test street1".to_string(),
            street2: Some("test street2".to_string()),
            street3: Some("test street3".to_string()),
            city: "test city".to_string(),
            state: "test state".to_string(),
            postal_code: "test postal code".to_string(),
            country: "test country".to_string(),
        };
        self
    }

    pub fn with_street1(mut self, street1: impl Into<String>) -> Self {
        self.address.street1 = street1.into();
        self
    }

    pub fn with_street2(mut self, street2: impl Into<String>) -> Self {
        self.address.street2 = Some(street2.into());
        self
    }

    pub fn with_street3(mut self, street3: impl Into<String>) -> Self {
        self.address.street3 = Some(street3.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.address.city = city.into();
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.address.state = state.into();
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.address.postal_code = postal_code.into();
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.address.country = country.into();
        self
    }

    pub fn build(self) -> Address {
        self.address
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_builder_starts_empty() {
        assert_eq!(AddressBuilder::new().build(), Address::default());
    }

    #[test]
    fn test_address_builder_override_after_test_values() {
        let address = AddressBuilder::new()
            .with_test_values()
            .with_city("Portland")
            .build();
        assert_eq!(address.city, "Portland");
        assert_eq!(address.street1, "test street1");
        assert_eq!(address.street3.as_deref(), Some("test street3"));
    }
}
