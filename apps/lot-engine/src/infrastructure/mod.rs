//! Infrastructure layer - adapters around the calculation core.

pub mod http;
