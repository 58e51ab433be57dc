use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// A username/password pair taken from a Basic `Authorization` header.
///
/// For this endpoint the username is the resource server's key and the
/// password its shared secret. Parsing is pure: a malformed header yields
/// `None` and the caller decides how to respond.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    /// Parse a raw `Authorization` header value.
    ///
    /// Returns `None` when the header is absent, not Basic-scheme, not valid
    /// Base64, not UTF-8, or lacks the `:` separator. Username and password
    /// may themselves be empty strings.
    pub fn parse(header: Option<&str>) -> Option<Self> {
        let encoded = header?.strip_prefix("Basic ")?;
        let decoded = STANDARD.decode(encoded.trim()).ok()?;
        let pair = String::from_utf8(decoded).ok()?;
        let (username, password) = pair.split_once(':')?;

        Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}
