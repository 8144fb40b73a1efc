//! First-match routing over an ordered route table.
//!
//! Matching is decoupled from dispatch: a hit produces a typed
//! `RouteMatch` (route id + captured trailing segment) and nothing else.

use hyper::Method;

/// Identifies which handler a matched route dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteId {
    Shutdown,
    Exit,
    Hello,
    Hello2,
    CatchAll,
}

/// Path pattern for a single route.
#[derive(Debug, Clone)]
pub enum PathPattern {
    /// Path must equal the literal exactly; nothing is captured.
    Exact(&'static str),
    /// Path must start with the literal; the remainder (possibly empty,
    /// possibly containing slashes) is the capture.
    Prefix(&'static str),
    /// Matches any path; captures everything after the leading slash.
    CatchAll,
}

pub struct Route {
    pub id: RouteId,
    pub methods: Vec<Method>,
    pub pattern: PathPattern,
}

/// Result of a successful route match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub id: RouteId,
    /// The captured trailing path segment (empty for exact matches).
    pub capture: String,
}

/// Build the route table in registration order.
///
/// Order matters: first match wins, and the catch-all goes last.
pub fn route_table() -> Vec<Route> {
    vec![
        Route {
            id: RouteId::Shutdown,
            methods: vec![Method::GET],
            pattern: PathPattern::Exact("/shutdown"),
        },
        Route {
            id: RouteId::Exit,
            methods: vec![Method::GET],
            pattern: PathPattern::Exact("/exit"),
        },
        Route {
            id: RouteId::Hello,
            methods: vec![Method::GET],
            pattern: PathPattern::Prefix("/hello/"),
        },
        Route {
            id: RouteId::Hello2,
            methods: vec![Method::GET, Method::PUT],
            pattern: PathPattern::Prefix("/hello2/"),
        },
        Route {
            id: RouteId::CatchAll,
            methods: vec![Method::GET],
            pattern: PathPattern::CatchAll,
        },
    ]
}

/// Find the first route matching the request method and path.
pub fn match_route(method: &Method, path: &str, routes: &[Route]) -> Option<RouteMatch> {
    routes.iter().find_map(|route| {
        if !route.methods.contains(method) {
            return None;
        }
        match_pattern(&route.pattern, path).map(|capture| RouteMatch {
            id: route.id,
            capture,
        })
    })
}

/// Check a path against a pattern, returning the capture on a hit.
fn match_pattern(pattern: &PathPattern, path: &str) -> Option<String> {
    match pattern {
        PathPattern::Exact(literal) => (path == *literal).then(String::new),
        PathPattern::Prefix(prefix) => path.strip_prefix(prefix).map(ToString::to_string),
        PathPattern::CatchAll => Some(path.strip_prefix('/').unwrap_or(path).to_string()),
    }
}
