//! HTTP/REST API adapter.
//!
//! Inbound adapter implementing the JSON endpoints that delegate to the
//! calculation core.

mod controller;
mod request;
mod response;

pub use controller::{AppState, create_router};
pub use request::*;
pub use response::*;
