//! Decision types returned by the scoring endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The decision the service reached for a case.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Decision {
    pub id: Option<String>,
    /// Stamped client-side from the case id the decision was requested for;
    /// the decision endpoint itself does not echo it back.
    pub case_id: Option<String>,
    pub result: DecisionResult,
    pub score: Option<i32>,
    pub confidence: Option<i32>,
    pub comment: Option<String>,
    pub version: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum DecisionResult {
    #[default]
    Unknown = 0,
    Pass = 1,
    Flag = 2,
    Fail = 3,
}

impl From<DecisionResult> for i32 {
    fn from(value: DecisionResult) -> Self {
        value as i32
    }
}

impl From<i32> for DecisionResult {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Pass,
            2 => Self::Flag,
            3 => Self::Fail,
            _ => Self::Unknown,
        }
    }
}

/// The detailed decision: the decision itself plus the raw evidence the
/// service used to reach it. The evidence shape varies by account
/// configuration, so it is kept as untyped JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct DetailedDecision {
    /// Stamped client-side, same as [`Decision::case_id`].
    pub case_id: Option<String>,
    pub case_number: Option<String>,
    pub decision: Option<Decision>,
    pub raw_data: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_result_decodes_from_integer() {
        let decision: Decision =
            serde_json::from_str(r#"{"Result":3,"Score":87}"#).unwrap();
        assert_eq!(decision.result, DecisionResult::Fail);
        assert_eq!(decision.score, Some(87));
    }

    #[test]
    fn unknown_result_code_maps_to_unknown() {
        let result: DecisionResult = serde_json::from_str("42").unwrap();
        assert_eq!(result, DecisionResult::Unknown);
    }
}
