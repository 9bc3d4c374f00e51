//! Session endpoints. These authenticate with the tenant's public key
//! rather than an issued token.

use reqwest::Method;
use uuid::Uuid;

use sentria_domain::{Detail, Result, Session};

use super::ApiClient;

impl ApiClient {
    /// Create a scoring session. The response carries the service-assigned
    /// `SessionId` needed for case creation.
    pub async fn post_session(&self, session: &Session, username: &str) -> Result<Session> {
        self.dispatcher.call("/session", Method::POST, Some(session), true, username).await
    }

    /// Attach a browser/device detail to an existing session.
    pub async fn post_detail(
        &self,
        session_id: Uuid,
        detail: &Detail,
        username: &str,
    ) -> Result<Detail> {
        self.dispatcher
            .call(&format!("/session/{session_id}/detail"), Method::POST, Some(detail), true, username)
            .await
    }
}
