//! Transaction endpoints, including the transaction's addresses and items.
//! Like the customer, each case carries at most one transaction.

use reqwest::Method;
use uuid::Uuid;

use sentria_domain::{Result, Transaction, TransactionAddress, TransactionItem};

use super::ApiClient;

impl ApiClient {
    pub async fn post_transaction(
        &self,
        case_id: &str,
        transaction: &Transaction,
        username: &str,
    ) -> Result<Transaction> {
        self.dispatcher
            .call(
                &format!("/case/{case_id}/transaction"),
                Method::POST,
                Some(transaction),
                true,
                username,
            )
            .await
    }

    pub async fn update_transaction(
        &self,
        case_id: &str,
        transaction: &Transaction,
        username: &str,
    ) -> Result<Transaction> {
        self.dispatcher
            .call(
                &format!("/case/{case_id}/transaction"),
                Method::PUT,
                Some(transaction),
                true,
                username,
            )
            .await
    }

    pub async fn get_transaction(&self, case_id: &str, username: &str) -> Result<Transaction> {
        self.dispatcher
            .call::<_, ()>(
                &format!("/case/{case_id}/transaction"),
                Method::GET,
                None,
                true,
                username,
            )
            .await
    }

    pub async fn post_transaction_address(
        &self,
        case_id: &str,
        address: &TransactionAddress,
        username: &str,
    ) -> Result<TransactionAddress> {
        self.dispatcher
            .call(
                &format!("/case/{case_id}/transaction/address"),
                Method::POST,
                Some(address),
                true,
                username,
            )
            .await
    }

    pub async fn update_transaction_address(
        &self,
        case_id: &str,
        address_id: Uuid,
        address: &TransactionAddress,
        username: &str,
    ) -> Result<TransactionAddress> {
        self.dispatcher
            .call(
                &format!("/case/{case_id}/transaction/address/{address_id}"),
                Method::PUT,
                Some(address),
                true,
                username,
            )
            .await
    }

    pub async fn get_transaction_address(
        &self,
        case_id: &str,
        address_id: Uuid,
        username: &str,
    ) -> Result<TransactionAddress> {
        self.dispatcher
            .call::<_, ()>(
                &format!("/case/{case_id}/transaction/address/{address_id}"),
                Method::GET,
                None,
                true,
                username,
            )
            .await
    }

    pub async fn get_transaction_addresses(
        &self,
        case_id: &str,
        username: &str,
    ) -> Result<Vec<TransactionAddress>> {
        self.dispatcher
            .call::<_, ()>(
                &format!("/case/{case_id}/transaction/addresses"),
                Method::GET,
                None,
                true,
                username,
            )
            .await
    }

    pub async fn post_transaction_item(
        &self,
        case_id: &str,
        item: &TransactionItem,
        username: &str,
    ) -> Result<TransactionItem> {
        self.dispatcher
            .call(
                &format!("/case/{case_id}/transaction/item"),
                Method::POST,
                Some(item),
                true,
                username,
            )
            .await
    }

    pub async fn update_transaction_item(
        &self,
        case_id: &str,
        item_id: Uuid,
        item: &TransactionItem,
        username: &str,
    ) -> Result<TransactionItem> {
        self.dispatcher
            .call(
                &format!("/case/{case_id}/transaction/item/{item_id}"),
                Method::PUT,
                Some(item),
                true,
                username,
            )
            .await
    }

    pub async fn get_transaction_item(
        &self,
        case_id: &str,
        item_id: Uuid,
        username: &str,
    ) -> Result<TransactionItem> {
        self.dispatcher
            .call::<_, ()>(
                &format!("/case/{case_id}/transaction/item/{item_id}"),
                Method::GET,
                None,
                true,
                username,
            )
            .await
    }

    pub async fn get_transaction_items(
        &self,
        case_id: &str,
        username: &str,
    ) -> Result<Vec<TransactionItem>> {
        self.dispatcher
            .call::<_, ()>(
                &format!("/case/{case_id}/transaction/items"),
                Method::GET,
                None,
                true,
                username,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;
    use wiremock::MockServer;

    use sentria_domain::{Transaction, TransactionItem};

    use crate::api::tests::{client, mount_authed, mount_token_endpoint};

    #[tokio::test]
    async fn transaction_round_trips_value_and_currency() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server).await;
        let id = Uuid::new_v4();
        mount_authed(
            &server,
            "POST",
            "/case/case-1/transaction",
            serde_json::json!({"Id": id, "TotalTransactionValue": 99.5, "Currency": "EUR"}),
        )
        .await;

        let client = client(&server.uri());
        let transaction = Transaction {
            total_transaction_value: Some(99.5),
            currency: Some("EUR".to_string()),
            ..Default::default()
        };
        let created = client.post_transaction("case-1", &transaction, "tester").await.unwrap();

        assert_eq!(created.id, Some(id));
        assert_eq!(created.currency.as_deref(), Some("EUR"));
    }

    #[tokio::test]
    async fn item_get_targets_the_item_id_path() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server).await;
        let item_id = Uuid::new_v4();
        mount_authed(
            &server,
            "GET",
            &format!("/case/case-1/transaction/item/{item_id}"),
            serde_json::json!({"Id": item_id, "Name": "widget", "Quantity": 3}),
        )
        .await;

        let client = client(&server.uri());
        let item: TransactionItem =
            client.get_transaction_item("case-1", item_id, "tester").await.unwrap();

        assert_eq!(item.name.as_deref(), Some("widget"));
        assert_eq!(item.quantity, Some(3));
    }

    #[tokio::test]
    async fn address_list_decodes_as_a_vec() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server).await;
        mount_authed(
            &server,
            "GET",
            "/case/case-1/transaction/addresses",
            serde_json::json!([{"Id": Uuid::new_v4(), "City": "Dublin"}]),
        )
        .await;

        let client = client(&server.uri());
        let addresses = client.get_transaction_addresses("case-1", "tester").await.unwrap();
        assert_eq!(addresses.len(), 1);
        assert_eq!(addresses[0].city.as_deref(), Some("Dublin"));
    }
}
