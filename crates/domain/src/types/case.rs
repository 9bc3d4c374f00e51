//! Case and case-status types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::customer::Customer;
use super::transaction::{Payment, Transaction};

/// A case groups everything the service scores: the session it belongs to,
/// the customer, the transaction, and any statuses recorded against it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Case {
    /// Assigned by the service on creation; required for all per-case calls.
    pub id: Option<String>,
    /// The session this case was created under.
    pub session_id: Option<Uuid>,
    /// Your own reference for the case.
    pub case_number: Option<String>,
    pub case_type: CaseType,
    pub timestamp: Option<DateTime<Utc>>,
    pub customer: Option<Customer>,
    pub transaction: Option<Transaction>,
    pub statuses: Vec<CaseStatus>,
    pub payments: Vec<Payment>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum CaseType {
    #[default]
    Default = 0,
    AccountCreation = 1,
    Application = 2,
}

impl From<CaseType> for i32 {
    fn from(value: CaseType) -> Self {
        value as i32
    }
}

impl From<i32> for CaseType {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::AccountCreation,
            2 => Self::Application,
            _ => Self::Default,
        }
    }
}

/// A status entry recorded against a case (order placed, rejected, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct CaseStatus {
    /// Assigned by the service on creation.
    pub id: Option<Uuid>,
    pub status: CaseStatusType,
    pub comment: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum CaseStatusType {
    #[default]
    Placed = 0,
    OnHoldReview = 1,
    Cancelled = 2,
    RejectedFraud = 3,
    RejectedAuthFailure = 4,
    RejectedSuspicious = 5,
    Completed = 6,
    Refunded = 7,
    ReportedFraud = 8,
}

impl From<CaseStatusType> for i32 {
    fn from(value: CaseStatusType) -> Self {
        value as i32
    }
}

impl From<i32> for CaseStatusType {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::OnHoldReview,
            2 => Self::Cancelled,
            3 => Self::RejectedFraud,
            4 => Self::RejectedAuthFailure,
            5 => Self::RejectedSuspicious,
            6 => Self::Completed,
            7 => Self::Refunded,
            8 => Self::ReportedFraud,
            _ => Self::Placed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_serializes_pascal_case_wire_names() {
        let case = Case {
            case_number: Some("ORDER-42".to_string()),
            case_type: CaseType::AccountCreation,
            ..Default::default()
        };

        let json = serde_json::to_value(&case).unwrap();
        assert_eq!(json["CaseNumber"], "ORDER-42");
        assert_eq!(json["CaseType"], 1);
        // Server-assigned fields are still written, never skipped.
        assert!(json.as_object().unwrap().contains_key("Id"));
    }

    #[test]
    fn server_assigned_id_round_trips_on_decode() {
        let json = r#"{"Id":"7f8a","SessionId":null,"CaseNumber":"N-1","CaseType":0,
            "Timestamp":null,"Customer":null,"Transaction":null,"Statuses":[],"Payments":[]}"#;
        let case: Case = serde_json::from_str(json).unwrap();
        assert_eq!(case.id.as_deref(), Some("7f8a"));
        assert_eq!(case.case_number.as_deref(), Some("N-1"));
    }

    #[test]
    fn partial_payload_decodes_with_defaults() {
        // The service omits fields it has no value for; absent fields decode
        // to their defaults rather than failing the payload.
        let case: Case = serde_json::from_str(r#"{"Id":"case-1"}"#).unwrap();
        assert_eq!(case.id.as_deref(), Some("case-1"));
        assert_eq!(case.case_type, CaseType::Default);
        assert!(case.statuses.is_empty());
        assert!(case.payments.is_empty());
    }

    #[test]
    fn unknown_status_type_falls_back_to_placed() {
        let status: CaseStatusType = serde_json::from_str("99").unwrap();
        assert_eq!(status, CaseStatusType::Placed);
    }
}
