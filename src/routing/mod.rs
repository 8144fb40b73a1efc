//! Route table and matching
//!
//! Routes are matched in registration order; the catch-all must stay last
//! or it would shadow every other route.

mod matcher;

pub use matcher::{match_route, route_table, PathPattern, Route, RouteId, RouteMatch};
