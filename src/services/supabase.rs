use crate::models::Transaction;
use crate::services::provider::{IdentityProvider, ProviderError, TransactionStore};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::{json, Value};
use std::time::Duration;

/// Table holding user transactions
pub const TRANSACTIONS_TABLE: &str = "transactions";

/// Supabase API client
///
/// Talks to two Supabase services:
/// - GoTrue (`/auth/v1`) for password sign-in, sign-up and sign-out
/// - PostgREST (`/rest/v1`) for reading the transactions table
pub struct SupabaseClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl SupabaseClient {
    /// Create a new Supabase client
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Result<Self, ProviderError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_credentials(&self, url: &str, email: &str, password: &str) -> Result<Value, ProviderError> {
        let response = self
            .client
            .post(url)
            .header("apikey", &self.api_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        let response = ensure_success(response).await?;

        response
            .json::<Value>()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse auth response: {}", e)))
    }

    /// Query a table filtered on `user_id`, ordered by date ascending
    async fn query_by_user(&self, table: &str, user_id: &str) -> Result<Vec<Value>, ProviderError> {
        let url = format!(
            "{}/rest/v1/{}?select=*&user_id=eq.{}&order=date.asc",
            self.base_url,
            table,
            urlencoding::encode(user_id)
        );

        tracing::debug!("Querying {} for user {}", table, user_id);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let response = ensure_success(response).await?;

        match response.json::<Value>().await? {
            Value::Array(rows) => Ok(rows),
            other => Err(ProviderError::InvalidResponse(format!(
                "Expected an array of rows, got: {}",
                other
            ))),
        }
    }
}

#[async_trait]
impl IdentityProvider for SupabaseClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Value, ProviderError> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);
        self.post_credentials(&url, email, password).await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Value, ProviderError> {
        let url = format!("{}/auth/v1/signup", self.base_url);
        self.post_credentials(&url, email, password).await
    }

    async fn sign_out(&self, access_token: Option<&str>) -> Result<(), ProviderError> {
        let Some(token) = access_token else {
            tracing::debug!("No session token supplied, nothing to revoke");
            return Ok(());
        };

        let response = self
            .client
            .post(format!("{}/auth/v1/logout", self.base_url))
            .header("apikey", &self.api_key)
            .bearer_auth(token)
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }
}

#[async_trait]
impl TransactionStore for SupabaseClient {
    async fn transactions_for_user(&self, user_id: &str) -> Result<Vec<Transaction>, ProviderError> {
        let rows = self.query_by_user(TRANSACTIONS_TABLE, user_id).await?;

        rows.into_iter()
            .map(|row| {
                serde_json::from_value(row)
                    .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse transaction: {}", e)))
            })
            .collect()
    }
}

/// Turn a non-success response into [`ProviderError::ApiError`]
async fn ensure_success(response: Response) -> Result<Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Unknown provider error")
            .to_string()
    });

    tracing::warn!("Supabase returned {}: {}", status, message);

    Err(ProviderError::ApiError {
        status: status.as_u16(),
        message,
    })
}

/// Extract the human-readable message from a Supabase error body
fn error_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;

    ["msg", "error_description", "message", "error"]
        .iter()
        .find_map(|key| json.get(*key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supabase_client_creation() {
        let client = SupabaseClient::new(
            "https://project.supabase.co/".to_string(),
            "anon_key".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(client.base_url(), "https://project.supabase.co");
        assert_eq!(client.api_key, "anon_key");
    }

    #[test]
    fn test_error_message_precedence() {
        assert_eq!(
            error_message(r#"{"code":400,"error_code":"invalid_credentials","msg":"Invalid login credentials"}"#),
            Some("Invalid login credentials".to_string())
        );
        assert_eq!(
            error_message(r#"{"error":"invalid_grant","error_description":"Email not confirmed"}"#),
            Some("Email not confirmed".to_string())
        );
        assert_eq!(error_message(r#"{"error":"boom"}"#), Some("boom".to_string()));
        assert_eq!(error_message("not json"), None);
    }
}
