//! Case-status endpoints. Statuses are append-only: they can be posted and
//! read, never updated.

use reqwest::Method;
use uuid::Uuid;

use sentria_domain::{CaseStatus, Result};

use super::ApiClient;

impl ApiClient {
    pub async fn post_case_status(
        &self,
        case_id: &str,
        status: &CaseStatus,
        username: &str,
    ) -> Result<CaseStatus> {
        self.dispatcher
            .call(&format!("/case/{case_id}/status"), Method::POST, Some(status), true, username)
            .await
    }

    pub async fn get_case_status(
        &self,
        case_id: &str,
        status_id: Uuid,
        username: &str,
    ) -> Result<CaseStatus> {
        self.dispatcher
            .call::<_, ()>(
                &format!("/case/{case_id}/status/{status_id}"),
                Method::GET,
                None,
                true,
                username,
            )
            .await
    }

    pub async fn get_case_statuses(
        &self,
        case_id: &str,
        username: &str,
    ) -> Result<Vec<CaseStatus>> {
        self.dispatcher
            .call::<_, ()>(&format!("/case/{case_id}/statuses"), Method::GET, None, true, username)
            .await
    }
}
