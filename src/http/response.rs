//! HTTP response building
//!
//! Plain-text response builders shared by all handlers.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build a 200 response with a plain-text body.
pub fn build_text_response(body: &str) -> Response<Full<Bytes>> {
    let content_length = body.len();
    Response::builder()
        .status(200)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap_or_else(|e| {
            crate::logger::log_error(&format!("Failed to build 200 response: {e}"));
            Response::new(Full::new(Bytes::from(body.to_string())))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            crate::logger::log_error(&format!("Failed to build 404 response: {e}"));
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}
