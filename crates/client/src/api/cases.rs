//! Case endpoints.

use reqwest::Method;

use sentria_domain::{Case, Result};

use super::ApiClient;

impl ApiClient {
    /// Create a case under an existing session.
    pub async fn post_case(&self, case: &Case, username: &str) -> Result<Case> {
        self.dispatcher.call("/case", Method::POST, Some(case), true, username).await
    }

    pub async fn update_case(&self, case_id: &str, case: &Case, username: &str) -> Result<Case> {
        self.dispatcher
            .call(&format!("/case/{case_id}"), Method::PUT, Some(case), true, username)
            .await
    }

    pub async fn get_case(&self, case_id: &str, username: &str) -> Result<Case> {
        self.dispatcher
            .call::<_, ()>(&format!("/case/{case_id}"), Method::GET, None, true, username)
            .await
    }
}
