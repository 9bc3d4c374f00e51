//! Session and device/browser detail types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scoring session. Posted once per customer interaction; the service
/// assigns `SessionId` and returns it in the response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Session {
    /// Assigned by the service on creation.
    pub session_id: Option<Uuid>,
    pub session_type: SessionType,
    pub timestamp: Option<DateTime<Utc>>,
    pub details: Vec<Detail>,
}

/// Kind of interaction a session captures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum SessionType {
    #[default]
    JavascriptTracking = 0,
    Mobile = 1,
    ServerSide = 2,
}

impl From<SessionType> for i32 {
    fn from(value: SessionType) -> Self {
        value as i32
    }
}

impl From<i32> for SessionType {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Mobile,
            2 => Self::ServerSide,
            _ => Self::JavascriptTracking,
        }
    }
}

/// Browser/device detail attached to an existing session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Detail {
    /// Assigned by the service on creation.
    pub id: Option<Uuid>,
    pub client_ip: Option<String>,
    pub user_agent: Option<String>,
    pub host_name: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}
