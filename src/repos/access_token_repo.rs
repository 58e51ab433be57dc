use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoResult;
use crate::repos::store::{AccessToken, AccessTokenStore};

/// DB access for issued access tokens.
///
/// Tokens are created by the (separate) authorization grant flow; this repo
/// only reads them. The schema is assumed to have at least these columns:
/// - access_tokens.token (text, unique)
/// - access_tokens.expires (bigint, epoch millis; 0 = never expires)
/// - access_tokens.principal (text)
/// - access_tokens.scopes (text[])
/// - access_tokens.roles (text[])
/// - access_tokens.client_name (text)
#[derive(Clone, Debug)]
pub struct PgAccessTokenRepo {
    pool: PgPool,
}

impl PgAccessTokenRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AccessTokenRow {
    token: String,
    expires: i64,
    principal: String,
    scopes: Vec<String>,
    roles: Vec<String>,
    client_name: String,
}

#[async_trait]
impl AccessTokenStore for PgAccessTokenRepo {
    async fn find_by_token(&self, token: &str) -> RepoResult<Option<AccessToken>> {
        let row = sqlx::query_as::<_, AccessTokenRow>(
            r#"
            SELECT token, expires, principal, scopes, roles, client_name
            FROM access_tokens
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| AccessToken {
            token: r.token,
            expires: r.expires,
            principal: r.principal,
            scopes: r.scopes,
            roles: r.roles,
            client_name: r.client_name,
        }))
    }
}
