use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoResult;
use crate::repos::store::{ResourceServer, ResourceServerStore};

/// DB access for the resource server registry.
///
/// The schema is assumed to have at least these columns:
/// - resource_servers.key (text, unique)
/// - resource_servers.secret (text)
#[derive(Clone, Debug)]
pub struct PgResourceServerRepo {
    pool: PgPool,
}

impl PgResourceServerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ResourceServerRow {
    key: String,
    secret: String,
}

#[async_trait]
impl ResourceServerStore for PgResourceServerRepo {
    async fn find_by_key(&self, key: &str) -> RepoResult<Option<ResourceServer>> {
        let row = sqlx::query_as::<_, ResourceServerRow>(
            r#"
            SELECT key, secret
            FROM resource_servers
            WHERE key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| ResourceServer {
            key: r.key,
            secret: r.secret,
        }))
    }
}
