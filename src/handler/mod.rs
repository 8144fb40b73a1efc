//! Request handling
//!
//! Entry point wired into hyper's `service_fn`. Matches the request
//! against the route table, gathers request parameters, and hands off to
//! the per-route handlers in [`routes`].

mod routes;

pub use routes::{dispatch, Dispatch, RequestInfo};

use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::AppState;
use crate::http::{query, response};
use crate::logger;
use crate::routing::{self, RouteId};

/// Handle one request end to end.
///
/// Shutdown-class handlers only signal the listener teardown; the
/// response still goes out on the already-accepted connection.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query_string = req.uri().query().map(ToString::to_string);

    let Some(matched) = routing::match_route(&method, &path, &state.routes) else {
        return Ok(response::build_404_response());
    };

    let mut params = query_string.as_deref().map(query::parse).unwrap_or_default();

    // Form-encoded bodies contribute parameters too (PUT /hello2/<seg>)
    if matched.id == RouteId::Hello2 && method != Method::GET && is_form_request(&req) {
        match req.into_body().collect().await {
            Ok(collected) => {
                let bytes = collected.to_bytes();
                match std::str::from_utf8(&bytes) {
                    Ok(text) => params.extend(query::parse(text)),
                    Err(_) => logger::log_warning("Ignoring non-UTF-8 form body"),
                }
            }
            Err(e) => logger::log_warning(&format!("Failed to read request body: {e}")),
        }
    }

    let info = RequestInfo { path, params };
    let outcome = routes::dispatch(&matched, &info, &state);

    if outcome.shutdown {
        state.shutdown.notify_one();
    }

    Ok(response::build_text_response(&outcome.body))
}

fn is_form_request(req: &Request<hyper::body::Incoming>) -> bool {
    req.headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}
