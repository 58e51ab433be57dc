use axum::{Router, routing::get};

use crate::api::v1::handlers::tokeninfo::tokeninfo;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/tokeninfo", get(tokeninfo))
}
