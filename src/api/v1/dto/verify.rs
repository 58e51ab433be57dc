use serde::Serialize;

use crate::repos::store::AccessToken;

/// Success payload for `GET /v1/tokeninfo` (Google tokeninfo style).
///
/// `audience` is the name of the client the token was issued to; `expires`
/// echoes the stored epoch-millisecond timestamp (0 = never expires).
#[derive(Debug, Clone, Serialize)]
pub struct TokenInfoResponse {
    pub audience: String,
    pub scopes: Vec<String>,
    pub roles: Vec<String>,
    pub principal: String,
    pub expires: i64,
}

impl From<AccessToken> for TokenInfoResponse {
    fn from(token: AccessToken) -> Self {
        Self {
            audience: token.client_name,
            scopes: token.scopes,
            roles: token.roles,
            principal: token.principal,
            expires: token.expires,
        }
    }
}

/// Error payload carrying a single reason code.
#[derive(Debug, Clone, Serialize)]
pub struct TokenErrorResponse {
    pub error: &'static str,
}

impl TokenErrorResponse {
    pub const NOT_FOUND: Self = Self { error: "not_found" };
    pub const TOKEN_EXPIRED: Self = Self {
        error: "token_expired",
    };
}
