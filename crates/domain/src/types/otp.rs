//! One-time-passcode (OTP) types.

use serde::{Deserialize, Serialize};

/// Request/response body for the OTP endpoints: POST requests or regenerates
/// a passcode for a case, PUT verifies one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct OtpResult {
    pub status: OtpStatus,
    pub phone_number: Option<String>,
    pub delivery_type: OtpDeliveryType,
    /// IETF language tag for the delivered message.
    pub language: Option<String>,
    /// Set only when verifying a previously delivered passcode.
    pub passcode: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum OtpStatus {
    #[default]
    Eligible = 0,
    Sent = 1,
    Verified = 2,
    Failed = 3,
    MaxAttemptsReached = 4,
    Abandoned = 5,
}

impl From<OtpStatus> for i32 {
    fn from(value: OtpStatus) -> Self {
        value as i32
    }
}

impl From<i32> for OtpStatus {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Sent,
            2 => Self::Verified,
            3 => Self::Failed,
            4 => Self::MaxAttemptsReached,
            5 => Self::Abandoned,
            _ => Self::Eligible,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum OtpDeliveryType {
    #[default]
    Sms = 0,
    Voice = 1,
}

impl From<OtpDeliveryType> for i32 {
    fn from(value: OtpDeliveryType) -> Self {
        value as i32
    }
}

impl From<i32> for OtpDeliveryType {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Voice,
            _ => Self::Sms,
        }
    }
}
