//! Digital-authentication endpoints: one-time passcodes and
//! knowledge-based-authentication results.

use reqwest::Method;

use sentria_domain::{KbaResult, OtpResult, Result};

use super::ApiClient;

impl ApiClient {
    /// Request (or regenerate) a one-time passcode for the case.
    pub async fn post_otp(
        &self,
        case_id: &str,
        request: &OtpResult,
        username: &str,
    ) -> Result<OtpResult> {
        self.dispatcher
            .call(
                &format!("/case/{case_id}/authentication/otp"),
                Method::POST,
                Some(request),
                true,
                username,
            )
            .await
    }

    /// Verify a previously delivered passcode.
    pub async fn put_otp(
        &self,
        case_id: &str,
        request: &OtpResult,
        username: &str,
    ) -> Result<OtpResult> {
        self.dispatcher
            .call(
                &format!("/case/{case_id}/authentication/otp"),
                Method::PUT,
                Some(request),
                true,
                username,
            )
            .await
    }

    /// Post the customer's KBA answers and get the verification outcome.
    pub async fn post_kba_result(
        &self,
        case_id: &str,
        result: &KbaResult,
        username: &str,
    ) -> Result<KbaResult> {
        self.dispatcher
            .call(
                &format!("/case/{case_id}/authentication/kba"),
                Method::POST,
                Some(result),
                true,
                username,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use wiremock::MockServer;

    use sentria_domain::{KbaResult, KbaStatus, OtpDeliveryType, OtpResult, OtpStatus};

    use crate::api::tests::{client, mount_authed, mount_token_endpoint};

    #[tokio::test]
    async fn post_otp_requests_a_passcode() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server).await;
        mount_authed(
            &server,
            "POST",
            "/case/case-1/authentication/otp",
            serde_json::json!({"Status": 1, "PhoneNumber": "+15550100", "DeliveryType": 0}),
        )
        .await;

        let client = client(&server.uri());
        let request = OtpResult {
            phone_number: Some("+15550100".to_string()),
            delivery_type: OtpDeliveryType::Sms,
            ..Default::default()
        };
        let sent = client.post_otp("case-1", &request, "tester").await.unwrap();

        assert_eq!(sent.status, OtpStatus::Sent);
    }

    #[tokio::test]
    async fn put_otp_verifies_a_passcode() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server).await;
        mount_authed(
            &server,
            "PUT",
            "/case/case-1/authentication/otp",
            serde_json::json!({"Status": 2, "DeliveryType": 0}),
        )
        .await;

        let client = client(&server.uri());
        let request = OtpResult { passcode: Some("123456".to_string()), ..Default::default() };
        let verified = client.put_otp("case-1", &request, "tester").await.unwrap();

        assert_eq!(verified.status, OtpStatus::Verified);
    }

    #[tokio::test]
    async fn post_kba_result_returns_the_outcome() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server).await;
        mount_authed(
            &server,
            "POST",
            "/case/case-1/authentication/kba",
            serde_json::json!({"Status": 3, "Questions": []}),
        )
        .await;

        let client = client(&server.uri());
        let result = KbaResult::default();
        let outcome = client.post_kba_result("case-1", &result, "tester").await.unwrap();

        assert_eq!(outcome.status, KbaStatus::Failed);
    }
}
