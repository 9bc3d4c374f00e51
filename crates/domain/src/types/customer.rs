//! Customer, address and email types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The customer attached to a case.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Customer {
    /// Assigned by the service on creation.
    pub id: Option<Uuid>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub account_number: Option<String>,
    pub emails: Vec<Email>,
    pub addresses: Vec<CustomerAddress>,
}

/// A postal address belonging to the customer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomerAddress {
    /// Assigned by the service on creation.
    pub id: Option<Uuid>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    /// ISO 3166-1 alpha-2.
    pub country_code: Option<String>,
    #[serde(rename = "Type")]
    pub address_type: AddressType,
    pub is_default: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum AddressType {
    #[default]
    Standard = 0,
    Billing = 1,
    Delivery = 2,
}

impl From<AddressType> for i32 {
    fn from(value: AddressType) -> Self {
        value as i32
    }
}

impl From<i32> for AddressType {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Billing,
            2 => Self::Delivery,
            _ => Self::Standard,
        }
    }
}

/// An email address belonging to the customer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Email {
    /// Assigned by the service on creation.
    pub id: Option<Uuid>,
    pub email_address: Option<String>,
    pub is_default: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_address_decodes_with_defaults() {
        let address: CustomerAddress =
            serde_json::from_str(r#"{"City":"Dublin"}"#).unwrap();
        assert_eq!(address.city.as_deref(), Some("Dublin"));
        assert_eq!(address.address_type, AddressType::Standard);
        assert!(!address.is_default);
    }

    #[test]
    fn partial_email_decodes_with_defaults() {
        let email: Email =
            serde_json::from_str(r#"{"EmailAddress":"a@example.com"}"#).unwrap();
        assert_eq!(email.email_address.as_deref(), Some("a@example.com"));
        assert!(!email.is_default);
    }
}
