//! Per-route handlers
//!
//! Each handler maps a matched request to a response body and writes its
//! lines to the shared request log. Dispatch is pure apart from logging,
//! so the handlers are testable without a live connection.

use crate::config::AppState;
use crate::routing::{RouteId, RouteMatch};

/// Request data a handler may consume.
pub struct RequestInfo {
    /// The literal request path as received.
    pub path: String,
    /// Query (and form) parameters in request order.
    pub params: Vec<(String, String)>,
}

/// Handler outcome: the response body plus whether the listener should
/// be torn down after the response is sent.
pub struct Dispatch {
    pub body: String,
    pub shutdown: bool,
}

/// Invoke the handler selected by the route match.
pub fn dispatch(matched: &RouteMatch, info: &RequestInfo, state: &AppState) -> Dispatch {
    match matched.id {
        RouteId::Shutdown => shutdown(state),
        RouteId::Exit => exit(state),
        RouteId::Hello | RouteId::CatchAll => hello(&matched.capture, state),
        RouteId::Hello2 => hello2(&matched.capture, info, state),
    }
}

/// GET /shutdown: log a shutdown notice with server info, stop the listener.
fn shutdown(state: &AppState) -> Dispatch {
    state
        .logger
        .write_line(&format!("Shutdown server at {}", state.local_addr));
    Dispatch {
        body: "stopped".to_string(),
        shutdown: true,
    }
}

/// GET /exit: stop the listener.
fn exit(state: &AppState) -> Dispatch {
    state.logger.write_line("Shutting down");
    Dispatch {
        body: "ok".to_string(),
        shutdown: true,
    }
}

/// GET /hello/<seg> and the catch-all.
fn hello(capture: &str, state: &AppState) -> Dispatch {
    state.logger.write_line(&format!("hello ==> {capture}"));
    Dispatch {
        body: format!("Hello {capture}"),
        shutdown: false,
    }
}

/// GET|PUT /hello2/<seg>: echo the matched path, log every parameter.
fn hello2(capture: &str, info: &RequestInfo, state: &AppState) -> Dispatch {
    state
        .logger
        .write_line(&format!("Got path = {}", info.path));
    for (key, value) in &info.params {
        state.logger.write_line(&format!("{key} {value}"));
    }
    Dispatch {
        body: format!("{} {capture}", info.path),
        shutdown: false,
    }
}
