//! In-memory store fakes and fixtures shared by the unit tests.
use std::collections::HashMap;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::repos::error::{RepoError, RepoResult};
use crate::repos::store::{AccessToken, AccessTokenStore, ResourceServer, ResourceServerStore};

pub fn basic_header(username: &str, password: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{username}:{password}"))
    )
}

pub fn sample_server() -> ResourceServer {
    ResourceServer {
        key: "rs1".to_string(),
        secret: "secret1".to_string(),
    }
}

pub fn sample_token() -> AccessToken {
    AccessToken {
        token: "tok-abc".to_string(),
        expires: 0,
        principal: "user1".to_string(),
        scopes: vec!["read".to_string()],
        roles: vec![],
        client_name: "client1".to_string(),
    }
}

#[derive(Default)]
pub struct MemoryResourceServerStore {
    servers: HashMap<String, ResourceServer>,
}

impl MemoryResourceServerStore {
    pub fn with(servers: impl IntoIterator<Item = ResourceServer>) -> Self {
        Self {
            servers: servers
                .into_iter()
                .map(|s| (s.key.clone(), s))
                .collect(),
        }
    }
}

#[async_trait]
impl ResourceServerStore for MemoryResourceServerStore {
    async fn find_by_key(&self, key: &str) -> RepoResult<Option<ResourceServer>> {
        Ok(self.servers.get(key).cloned())
    }
}

#[derive(Default)]
pub struct MemoryAccessTokenStore {
    tokens: HashMap<String, AccessToken>,
}

impl MemoryAccessTokenStore {
    pub fn with(tokens: impl IntoIterator<Item = AccessToken>) -> Self {
        Self {
            tokens: tokens
                .into_iter()
                .map(|t| (t.token.clone(), t))
                .collect(),
        }
    }
}

#[async_trait]
impl AccessTokenStore for MemoryAccessTokenStore {
    async fn find_by_token(&self, token: &str) -> RepoResult<Option<AccessToken>> {
        Ok(self.tokens.get(token).cloned())
    }
}

/// Store that always fails, for asserting backend errors become 5xx.
pub struct FailingResourceServerStore;

#[async_trait]
impl ResourceServerStore for FailingResourceServerStore {
    async fn find_by_key(&self, _key: &str) -> RepoResult<Option<ResourceServer>> {
        Err(RepoError::Db(sqlx::Error::PoolClosed))
    }
}

/// Store that always fails, for asserting backend errors become 5xx.
pub struct FailingAccessTokenStore;

#[async_trait]
impl AccessTokenStore for FailingAccessTokenStore {
    async fn find_by_token(&self, _token: &str) -> RepoResult<Option<AccessToken>> {
        Err(RepoError::Db(sqlx::Error::PoolClosed))
    }
}
