use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use crate::error::AppError;
use crate::repos::store::{AccessToken, AccessTokenStore, ResourceServerStore};
use crate::services::auth::credentials::BasicCredentials;

/// Terminal outcome of a verification request.
///
/// Every variant maps to exactly one HTTP response; the handler owns that
/// mapping. Backend failures are not outcomes and travel as `Err(AppError)`.
#[derive(Debug, Clone)]
pub enum Verification {
    /// Malformed credentials, blank token parameter, unknown resource server
    /// key, or wrong secret. Deliberately one variant for all four causes so
    /// callers cannot probe which part of authentication failed.
    Unauthorized,
    /// Caller authenticated, token string unknown.
    NotFound,
    /// Caller authenticated, token known but past its expiry.
    Expired,
    /// Caller authenticated, token valid.
    Valid(AccessToken),
}

/// Orchestrates the verification flow: credentials -> resource server ->
/// secret -> token -> expiry. Strictly linear with early exits; holds no
/// mutable state, so concurrent use needs no synchronization beyond the
/// stores' own.
#[derive(Clone)]
pub struct TokenVerifier {
    resource_servers: Arc<dyn ResourceServerStore>,
    access_tokens: Arc<dyn AccessTokenStore>,
}

impl TokenVerifier {
    pub fn new(
        resource_servers: Arc<dyn ResourceServerStore>,
        access_tokens: Arc<dyn AccessTokenStore>,
    ) -> Self {
        Self {
            resource_servers,
            access_tokens,
        }
    }

    /// Run the full verification sequence against the current clock.
    ///
    /// `authorization` is the raw `Authorization` header value if the caller
    /// sent one; `access_token` the raw query parameter. Any token may be
    /// verified by any authenticated resource server; tokens are not scoped
    /// to the caller.
    pub async fn verify(
        &self,
        authorization: Option<&str>,
        access_token: Option<&str>,
    ) -> Result<Verification, AppError> {
        self.verify_at(authorization, access_token, Utc::now().timestamp_millis())
            .await
    }

    // `now_millis` is a parameter so expiry can be tested at exact instants.
    async fn verify_at(
        &self,
        authorization: Option<&str>,
        access_token: Option<&str>,
        now_millis: i64,
    ) -> Result<Verification, AppError> {
        let token = access_token.unwrap_or_default().trim();

        let credentials = match (BasicCredentials::parse(authorization), token) {
            (Some(credentials), token) if !token.is_empty() => credentials,
            (credentials, token) => {
                let username = credentials
                    .as_ref()
                    .map(|c| c.username.as_str())
                    .unwrap_or("");
                info!(
                    username,
                    access_token = token,
                    "responding with Unauthorized"
                );
                return Ok(Verification::Unauthorized);
            }
        };

        let key = credentials.username.as_str();

        let resource_server = self
            .resource_servers
            .find_by_key(key)
            .await
            .map_err(|e| {
                error!(key, error = %e, "resource server lookup failed");
                AppError::Internal
            })?;

        let Some(resource_server) = resource_server else {
            warn!(key, "resource server not found");
            return Ok(Verification::Unauthorized);
        };

        // Exact string comparison; the secret the caller actually sent is
        // never logged.
        if resource_server.secret != credentials.password {
            warn!(key, "resource server presented the wrong secret");
            return Ok(Verification::Unauthorized);
        }

        let found = self.access_tokens.find_by_token(token).await.map_err(|e| {
            error!(key, error = %e, "access token lookup failed");
            AppError::Internal
        })?;

        let Some(access_token) = found else {
            info!(
                username = key,
                access_token = token,
                "responding with Not Found"
            );
            return Ok(Verification::NotFound);
        };

        // 0 is the never-expires sentinel; the comparison is strict, so a
        // token expiring exactly now is still valid.
        if access_token.expires != 0 && access_token.expires < now_millis {
            info!(
                username = key,
                access_token = token,
                "responding with Gone"
            );
            return Ok(Verification::Expired);
        }

        info!(
            username = key,
            access_token = token,
            audience = %access_token.client_name,
            principal = %access_token.principal,
            scopes = ?access_token.scopes,
            roles = ?access_token.roles,
            expires = access_token.expires,
            "responding with OK"
        );

        Ok(Verification::Valid(access_token))
    }
}
