//! Gateway-injected identity headers extractor.

use axum::Json;
use axum::extract::FromRequestParts;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use http::request::Parts;

/// Caller identity injected by the gateway via `x-souk-subject` and the
/// optional `x-souk-email` / `x-souk-name` claim headers.
///
/// Rejects with 401 if `x-souk-subject` is absent or empty. Handlers that
/// take this extractor therefore never run without a trusted caller.
#[derive(Debug, Clone)]
pub struct Identity {
    /// Opaque external-auth subject id. Unique and immutable per user.
    pub subject: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

/// Rejection produced when the subject header is missing.
#[derive(Debug)]
pub struct MissingIdentity;

impl IntoResponse for MissingIdentity {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": "missing caller identity" });
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

fn header_string(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = MissingIdentity;

    // axum-core 0.5 declares this as `fn -> impl Future + Send`, and an
    // `async fn` impl trips E0195 under precise capturing. Read the headers
    // synchronously and return a 'static async move block instead.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let subject = header_string(parts, "x-souk-subject");
        let email = header_string(parts, "x-souk-email");
        let name = header_string(parts, "x-souk-name");

        async move {
            let subject = subject.ok_or(MissingIdentity)?;
            Ok(Self {
                subject,
                email,
                name,
            })
        }
    }
}
