use axum::http::StatusCode;

/// Handler for `GET /healthz` — liveness.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz` — readiness. Services with external
/// dependencies can mount their own richer check instead.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
