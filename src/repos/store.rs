//! Lookup interfaces the verifier depends on.
//!
//! The verification flow only ever needs two reads: a resource server by its
//! key and an access token by its opaque value. Keeping the surface this small
//! lets any backend (Postgres here, something else elsewhere) satisfy it.
use async_trait::async_trait;

use crate::repos::error::RepoResult;

/// A registered caller of the tokeninfo endpoint.
///
/// The key doubles as the Basic-auth username, the secret as the password.
/// Read-only from this service's perspective.
#[derive(Debug, Clone)]
pub struct ResourceServer {
    pub key: String,
    pub secret: String,
}

/// A previously issued access token, as stored by the (out-of-scope)
/// authorization grant flow.
///
/// `expires` is an absolute epoch-millisecond timestamp; `0` means the token
/// never expires.
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires: i64,
    pub principal: String,
    pub scopes: Vec<String>,
    pub roles: Vec<String>,
    pub client_name: String,
}

#[async_trait]
pub trait ResourceServerStore: Send + Sync {
    // Returns Ok(None) when no resource server is registered under `key`.
    // Err(_) means the backend itself failed and must surface as a 5xx.
    async fn find_by_key(&self, key: &str) -> RepoResult<Option<ResourceServer>>;
}

#[async_trait]
pub trait AccessTokenStore: Send + Sync {
    // Returns Ok(None) when the token string is unknown.
    // Err(_) means the backend itself failed and must surface as a 5xx.
    async fn find_by_token(&self, token: &str) -> RepoResult<Option<AccessToken>>;
}
