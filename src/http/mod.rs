//! HTTP helpers
//!
//! Query/form parameter parsing and response builders, decoupled from
//! routing and handler logic.

pub mod query;
pub mod response;
