//! Transaction, payment, delivery-address and line-item types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The monetary transaction attached to a case.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Transaction {
    /// Assigned by the service on creation.
    pub id: Option<Uuid>,
    pub total_transaction_value: Option<f64>,
    /// ISO 4217 code, e.g. "USD".
    pub currency: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub addresses: Vec<TransactionAddress>,
    pub items: Vec<TransactionItem>,
}

/// A delivery/billing address on the transaction. Kept distinct from
/// [`super::customer::CustomerAddress`] because the service treats them as
/// separate sub-resources with separate endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct TransactionAddress {
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
    pub address_type: super::customer::AddressType,
    pub is_default: bool,
}

/// A line item on the transaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct TransactionItem {
    /// Assigned by the service on creation.
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub item_value: Option<f64>,
}

/// A payment instrument used on the case. Only the BIN is ever transmitted;
/// full card numbers are never part of the contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Payment {
    /// Assigned by the service on creation.
    pub id: Option<Uuid>,
    pub payment_type: PaymentType,
    #[serde(rename = "BINNumber")]
    pub bin_number: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum PaymentType {
    #[default]
    None = 0,
    CreditCard = 1,
    DebitCard = 2,
    DirectDebit = 3,
    Paypal = 4,
}

impl From<PaymentType> for i32 {
    fn from(value: PaymentType) -> Self {
        value as i32
    }
}

impl From<i32> for PaymentType {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::CreditCard,
            2 => Self::DebitCard,
            3 => Self::DirectDebit,
            4 => Self::Paypal,
            _ => Self::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_address_decodes_with_defaults() {
        let address: TransactionAddress =
            serde_json::from_str(r#"{"City":"Dublin"}"#).unwrap();
        assert_eq!(address.city.as_deref(), Some("Dublin"));
        assert_eq!(address.address_type, crate::types::AddressType::Standard);
        assert!(!address.is_default);
    }

    #[test]
    fn partial_payment_decodes_with_defaults() {
        let payment: Payment = serde_json::from_str(r#"{"BINNumber":"424242"}"#).unwrap();
        assert_eq!(payment.bin_number.as_deref(), Some("424242"));
        assert_eq!(payment.payment_type, PaymentType::None);
    }

    #[test]
    fn payment_bin_uses_exact_wire_name() {
        let payment = Payment {
            payment_type: PaymentType::CreditCard,
            bin_number: Some("424242".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&payment).unwrap();
        assert_eq!(json["BINNumber"], "424242");
        assert_eq!(json["PaymentType"], 1);
    }
}
