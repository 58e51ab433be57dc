use std::sync::Arc;

use crate::services::auth::verifier::TokenVerifier;

#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<TokenVerifier>,
}

impl AppState {
    pub fn new(verifier: Arc<TokenVerifier>) -> Self {
        Self { verifier }
    }
}
