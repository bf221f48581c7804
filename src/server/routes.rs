use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};

use crate::{domain::repositories::receipt_repository::ReceiptRepository, util::ReceiptRelayUtil};

use super::{
    error::ApiError,
    models::{HealthResponseBody, VerifyRequestBody, VerifyResponseBody},
};

/// POST /verify
///
/// 200 for a valid receipt, 400 when Apple rejects it, 500 when Apple could
/// not be reached or answered with something unreadable.
pub(crate) async fn verify<R: ReceiptRepository + 'static>(
    State(relay): State<Arc<ReceiptRelayUtil<R>>>,
    payload: Result<Json<VerifyRequestBody>, JsonRejection>,
) -> Result<(StatusCode, Json<VerifyResponseBody>), ApiError> {
    let Json(body) = payload?;
    let request = body.into_verification_request()?;
    let result = relay.verify(request).await;
    let status = if result.valid {
        StatusCode::OK
    } else if result.is_transport_failure() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::BAD_REQUEST
    };
    Ok((status, Json(result.into())))
}

/// GET /health
///
/// Does not touch Apple; only reports that the process is serving.
pub(crate) async fn health() -> Json<HealthResponseBody> {
    Json(HealthResponseBody { status: "ok" })
}
