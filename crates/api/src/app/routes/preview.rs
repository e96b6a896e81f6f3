use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::app::services::AppServices;

/// The generated Cedar document, ready for copy-to-clipboard in the console.
///
/// Recomputed from scratch on every request; the text is the one export
/// surface the console has.
pub async fn policy_document(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let snapshot = services.snapshot();
    let text = cedarboard_policy::generate(&snapshot);
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    )
        .into_response()
}
