use crate::services::provider::{IdentityProvider, ProviderError};
use serde_json::Value;
use std::sync::Arc;

/// Pass-through to the identity provider
///
/// Holds no session state of its own; every call goes straight to the
/// provider and its answer (or fault) is handed back unchanged.
#[derive(Clone)]
pub struct AuthGateway {
    provider: Arc<dyn IdentityProvider>,
}

impl AuthGateway {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Value, ProviderError> {
        tracing::info!("Login attempt for {}", email);
        self.provider.sign_in(email, password).await.map_err(|e| {
            tracing::warn!("Login failed for {}: {}", email, e);
            e
        })
    }

    pub async fn signup(&self, email: &str, password: &str) -> Result<Value, ProviderError> {
        tracing::info!("Signup attempt for {}", email);
        self.provider.sign_up(email, password).await.map_err(|e| {
            tracing::warn!("Signup failed for {}: {}", email, e);
            e
        })
    }

    pub async fn logout(&self, access_token: Option<&str>) -> Result<(), ProviderError> {
        self.provider.sign_out(access_token).await.map_err(|e| {
            tracing::warn!("Logout failed: {}", e);
            e
        })
    }
}
