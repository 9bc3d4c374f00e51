//! Knowledge-based-authentication (KBA) types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A set of KBA answers posted against a case, and the verification outcome
/// returned by the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct KbaResult {
    pub status: KbaStatus,
    pub questions: Vec<KbaQuestion>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct KbaQuestion {
    pub id: Option<Uuid>,
    pub question_text: Option<String>,
    pub answers: Vec<KbaAnswer>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct KbaAnswer {
    pub id: Option<Uuid>,
    pub answer_text: Option<String>,
    pub chosen: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum KbaStatus {
    #[default]
    Offered = 0,
    MultiPassOffered = 1,
    Verified = 2,
    Failed = 3,
    NoData = 4,
}

impl From<KbaStatus> for i32 {
    fn from(value: KbaStatus) -> Self {
        value as i32
    }
}

impl From<i32> for KbaStatus {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::MultiPassOffered,
            2 => Self::Verified,
            3 => Self::Failed,
            4 => Self::NoData,
            _ => Self::Offered,
        }
    }
}
