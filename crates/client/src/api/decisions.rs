//! Decision endpoints.
//!
//! The decision endpoints do not echo the case id back, so both methods
//! stamp the requested id onto the decoded result before returning it.

use reqwest::Method;

use sentria_domain::{Decision, DetailedDecision, Result};

use super::ApiClient;

impl ApiClient {
    pub async fn get_decision(&self, case_id: &str, username: &str) -> Result<Decision> {
        let mut decision: Decision = self
            .dispatcher
            .call::<_, ()>(&format!("/decision/{case_id}"), Method::GET, None, true, username)
            .await?;
        decision.case_id = Some(case_id.to_string());
        Ok(decision)
    }

    pub async fn get_detailed_decision(
        &self,
        case_id: &str,
        username: &str,
    ) -> Result<DetailedDecision> {
        let mut decision: DetailedDecision = self
            .dispatcher
            .call::<_, ()>(
                &format!("/detailedDecision/{case_id}"),
                Method::GET,
                None,
                true,
                username,
            )
            .await?;
        decision.case_id = Some(case_id.to_string());
        Ok(decision)
    }
}
