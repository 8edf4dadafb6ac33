use std::sync::Arc;
use std::time::Duration;

use flatdues_common::models::auth::{LoginRequest, Principal, RegisterRequest};
use flatdues_common::models::bill::{AdminStats, Bill, NewBill, PayRequest};
use flatdues_common::models::resident::Resident;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::error::PortalError;

/// HTTP client for the maintenance-billing backend
///
/// Auth endpoints are public; everything else carries the session's bearer
/// token. All calls are single-attempt: a transient failure surfaces to the
/// caller immediately.
#[derive(Clone)]
pub struct PortalClient {
    client: reqwest::Client,
    base_url: Arc<str>,
}

impl PortalClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PortalError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: Arc::from(base_url.trim_end_matches('/')),
        })
    }

    /// POST /api/auth/login
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<Principal, PortalError> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_public("/api/auth/login", &req, "Login failed").await
    }

    /// POST /api/auth/register
    #[tracing::instrument(skip(self, req))]
    pub async fn register(&self, req: &RegisterRequest) -> Result<Principal, PortalError> {
        self.post_public("/api/auth/register", req, "Registration failed")
            .await
    }

    /// GET /api/admin/bills
    #[tracing::instrument(skip(self, token))]
    pub async fn list_bills(&self, token: &str) -> Result<Vec<Bill>, PortalError> {
        self.get_authed("/api/admin/bills", token, "Failed to load bills")
            .await
    }

    /// POST /api/admin/bills
    #[tracing::instrument(skip(self, token, bill))]
    pub async fn create_bill(&self, token: &str, bill: &NewBill) -> Result<Bill, PortalError> {
        self.post_authed("/api/admin/bills", token, bill, "Failed to create bill")
            .await
    }

    /// GET /api/admin/residents
    #[tracing::instrument(skip(self, token))]
    pub async fn list_residents(&self, token: &str) -> Result<Vec<Resident>, PortalError> {
        self.get_authed("/api/admin/residents", token, "Failed to load residents")
            .await
    }

    /// GET /api/admin/stats
    #[tracing::instrument(skip(self, token))]
    pub async fn admin_stats(&self, token: &str) -> Result<AdminStats, PortalError> {
        self.get_authed("/api/admin/stats", token, "Failed to load stats")
            .await
    }

    /// GET /api/resident/bills - scoped server-side to the token's owner
    #[tracing::instrument(skip(self, token))]
    pub async fn own_bills(&self, token: &str) -> Result<Vec<Bill>, PortalError> {
        self.get_authed("/api/resident/bills", token, "Failed to load bills")
            .await
    }

    /// POST /api/resident/pay
    #[tracing::instrument(skip(self, token))]
    pub async fn pay_bill(&self, token: &str, bill_id: Uuid) -> Result<(), PortalError> {
        let url = format!("{}/api/resident/pay", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(&PayRequest { bill_id })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(server_error(response, "Payment failed").await);
        }
        Ok(())
    }

    async fn get_authed<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
        fallback: &str,
    ) -> Result<T, PortalError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;
        decode(response, fallback).await
    }

    async fn post_authed<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, PortalError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(body)
            .send()
            .await?;
        decode(response, fallback).await
    }

    async fn post_public<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, PortalError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;
        decode(response, fallback).await
    }
}

async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
    fallback: &str,
) -> Result<T, PortalError> {
    if !response.status().is_success() {
        return Err(server_error(response, fallback).await);
    }
    Ok(response.json().await?)
}

/// Turn a non-success response into a `PortalError::Server`, preserving the
/// server's own message where the body has one.
async fn server_error(response: reqwest::Response, fallback: &str) -> PortalError {
    let status = response.status();
    let message = match response.text().await {
        Ok(body) => extract_message(&body).unwrap_or_else(|| fallback.to_string()),
        Err(_) => fallback.to_string(),
    };
    PortalError::Server { status, message }
}

/// Error bodies are `{"message": ...}`; some deployments use `{"error": ...}`.
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))?
        .as_str()
        .map(str::to_string)
}
