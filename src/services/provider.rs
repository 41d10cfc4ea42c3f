use crate::models::Transaction;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when talking to the identity/database provider
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The provider answered with a non-success status. Displays as the
    /// provider's own message so it can be relayed to clients verbatim.
    #[error("{message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Sign-in, sign-up and sign-out against the identity provider
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Password sign-in. Returns the provider's session object unchanged.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Value, ProviderError>;

    /// Account creation. Returns the provider's session/user object unchanged.
    async fn sign_up(&self, email: &str, password: &str) -> Result<Value, ProviderError>;

    /// Revoke the session behind `access_token`, if any
    async fn sign_out(&self, access_token: Option<&str>) -> Result<(), ProviderError>;
}

/// Read access to the transactions table
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// All transactions belonging to `user_id`, oldest first
    async fn transactions_for_user(&self, user_id: &str) -> Result<Vec<Transaction>, ProviderError>;
}
