use axum::{
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Tag every request with a UUIDv7 request id: logged on completion and
/// echoed back in the `x-request-id` response header.
pub async fn request_id(req: axum::http::Request<axum::body::Body>, next: Next) -> Response {
    let request_id = Uuid::now_v7();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let mut res = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        res.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    tracing::info!(
        %request_id,
        %method,
        path,
        status = res.status().as_u16(),
        "request handled"
    );

    res
}
