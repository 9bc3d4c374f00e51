//! Payment endpoints.

use reqwest::Method;
use uuid::Uuid;

use sentria_domain::{Payment, Result};

use super::ApiClient;

impl ApiClient {
    pub async fn post_payment(
        &self,
        case_id: &str,
        payment: &Payment,
        username: &str,
    ) -> Result<Payment> {
        self.dispatcher
            .call(&format!("/case/{case_id}/payment"), Method::POST, Some(payment), true, username)
            .await
    }

    pub async fn update_payment(
        &self,
        case_id: &str,
        payment_id: Uuid,
        payment: &Payment,
        username: &str,
    ) -> Result<Payment> {
        self.dispatcher
            .call(
                &format!("/case/{case_id}/payment/{payment_id}"),
                Method::PUT,
                Some(payment),
                true,
                username,
            )
            .await
    }

    pub async fn get_payment(
        &self,
        case_id: &str,
        payment_id: Uuid,
        username: &str,
    ) -> Result<Payment> {
        self.dispatcher
            .call::<_, ()>(
                &format!("/case/{case_id}/payment/{payment_id}"),
                Method::GET,
                None,
                true,
                username,
            )
            .await
    }

    pub async fn get_payments(&self, case_id: &str, username: &str) -> Result<Vec<Payment>> {
        self.dispatcher
            .call::<_, ()>(&format!("/case/{case_id}/payments"), Method::GET, None, true, username)
            .await
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;
    use wiremock::MockServer;

    use sentria_domain::{Payment, PaymentType};

    use crate::api::tests::{client, mount_authed, mount_token_endpoint};

    #[tokio::test]
    async fn post_payment_round_trips_type_and_bin() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server).await;
        let id = Uuid::new_v4();
        mount_authed(
            &server,
            "POST",
            "/case/case-1/payment",
            serde_json::json!({"Id": id, "PaymentType": 1, "BINNumber": "424242"}),
        )
        .await;

        let client = client(&server.uri());
        let payment = Payment {
            payment_type: PaymentType::CreditCard,
            bin_number: Some("424242".to_string()),
            ..Default::default()
        };
        let created = client.post_payment("case-1", &payment, "tester").await.unwrap();

        assert_eq!(created.id, Some(id));
        assert_eq!(created.payment_type, PaymentType::CreditCard);
        assert_eq!(created.bin_number.as_deref(), Some("424242"));
    }

    #[tokio::test]
    async fn payment_list_decodes_as_a_vec() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server).await;
        mount_authed(
            &server,
            "GET",
            "/case/case-1/payments",
            serde_json::json!([
                {"Id": Uuid::new_v4(), "PaymentType": 4, "BINNumber": null},
            ]),
        )
        .await;

        let client = client(&server.uri());
        let payments = client.get_payments("case-1", "tester").await.unwrap();
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].payment_type, PaymentType::Paypal);
    }
}
