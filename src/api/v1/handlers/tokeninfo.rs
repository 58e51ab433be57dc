use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::api::v1::dto::verify::{TokenErrorResponse, TokenInfoResponse};
use crate::error::AppError;
use crate::services::auth::verifier::Verification;
use crate::state::AppState;

/// Challenge sent with every 401, identical for all authentication failures.
const WWW_AUTHENTICATE_BASIC: &str = "Basic realm=\"Authorization Server\"";

#[derive(Debug, Deserialize)]
pub struct TokenInfoQuery {
    pub access_token: Option<String>,
}

/// `GET /v1/tokeninfo`
///
/// The verifier decides; this handler only maps its outcome onto the wire:
/// 401 (no body, Basic challenge), 404/410 (reason code), 200 (token data).
pub async fn tokeninfo(
    State(state): State<AppState>,
    Query(query): Query<TokenInfoQuery>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let outcome = state
        .verifier
        .verify(authorization, query.access_token.as_deref())
        .await?;

    let response = match outcome {
        Verification::Unauthorized => unauthorized(),
        Verification::NotFound => {
            (StatusCode::NOT_FOUND, Json(TokenErrorResponse::NOT_FOUND)).into_response()
        }
        Verification::Expired => {
            (StatusCode::GONE, Json(TokenErrorResponse::TOKEN_EXPIRED)).into_response()
        }
        Verification::Valid(token) => {
            (StatusCode::OK, Json(TokenInfoResponse::from(token))).into_response()
        }
    };

    Ok(response)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, WWW_AUTHENTICATE_BASIC)],
    )
        .into_response()
}
