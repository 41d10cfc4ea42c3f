// Service exports
pub mod auth;
pub mod provider;
pub mod supabase;

pub use auth::AuthGateway;
pub use provider::{IdentityProvider, ProviderError, TransactionStore};
pub use supabase::{SupabaseClient, TRANSACTIONS_TABLE};
