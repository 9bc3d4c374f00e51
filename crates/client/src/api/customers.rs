//! Customer endpoints, including the customer's addresses and emails.
//! Each case carries at most one customer, so the customer path has no id
//! segment of its own.

use reqwest::Method;
use uuid::Uuid;

use sentria_domain::{Customer, CustomerAddress, Email, Result};

use super::ApiClient;

impl ApiClient {
    pub async fn post_customer(
        &self,
        case_id: &str,
        customer: &Customer,
        username: &str,
    ) -> Result<Customer> {
        self.dispatcher
            .call(&format!("/case/{case_id}/customer"), Method::POST, Some(customer), true, username)
            .await
    }

    pub async fn update_customer(
        &self,
        case_id: &str,
        customer: &Customer,
        username: &str,
    ) -> Result<Customer> {
        self.dispatcher
            .call(&format!("/case/{case_id}/customer"), Method::PUT, Some(customer), true, username)
            .await
    }

    pub async fn get_customer(&self, case_id: &str, username: &str) -> Result<Customer> {
        self.dispatcher
            .call::<_, ()>(&format!("/case/{case_id}/customer"), Method::GET, None, true, username)
            .await
    }

    pub async fn post_customer_address(
        &self,
        case_id: &str,
        address: &CustomerAddress,
        username: &str,
    ) -> Result<CustomerAddress> {
        self.dispatcher
            .call(
                &format!("/case/{case_id}/customer/address"),
                Method::POST,
                Some(address),
                true,
                username,
            )
            .await
    }

    pub async fn update_customer_address(
        &self,
        case_id: &str,
        address_id: Uuid,
        address: &CustomerAddress,
        username: &str,
    ) -> Result<CustomerAddress> {
        self.dispatcher
            .call(
                &format!("/case/{case_id}/customer/address/{address_id}"),
                Method::PUT,
                Some(address),
                true,
                username,
            )
            .await
    }

    pub async fn get_customer_address(
        &self,
        case_id: &str,
        address_id: Uuid,
        username: &str,
    ) -> Result<CustomerAddress> {
        self.dispatcher
            .call::<_, ()>(
                &format!("/case/{case_id}/customer/address/{address_id}"),
                Method::GET,
                None,
                true,
                username,
            )
            .await
    }

    pub async fn get_customer_addresses(
        &self,
        case_id: &str,
        username: &str,
    ) -> Result<Vec<CustomerAddress>> {
        self.dispatcher
            .call::<_, ()>(
                &format!("/case/{case_id}/customer/addresses"),
                Method::GET,
                None,
                true,
                username,
            )
            .await
    }

    pub async fn post_email(
        &self,
        case_id: &str,
        email: &Email,
        username: &str,
    ) -> Result<Email> {
        self.dispatcher
            .call(
                &format!("/case/{case_id}/customer/email"),
                Method::POST,
                Some(email),
                true,
                username,
            )
            .await
    }

    pub async fn update_email(
        &self,
        case_id: &str,
        email_id: Uuid,
        email: &Email,
        username: &str,
    ) -> Result<Email> {
        self.dispatcher
            .call(
                &format!("/case/{case_id}/customer/email/{email_id}"),
                Method::PUT,
                Some(email),
                true,
                username,
            )
            .await
    }

    pub async fn get_email(
        &self,
        case_id: &str,
        email_id: Uuid,
        username: &str,
    ) -> Result<Email> {
        self.dispatcher
            .call::<_, ()>(
                &format!("/case/{case_id}/customer/email/{email_id}"),
                Method::GET,
                None,
                true,
                username,
            )
            .await
    }

    pub async fn get_emails(&self, case_id: &str, username: &str) -> Result<Vec<Email>> {
        self.dispatcher
            .call::<_, ()>(
                &format!("/case/{case_id}/customer/emails"),
                Method::GET,
                None,
                true,
                username,
            )
            .await
    }
}
