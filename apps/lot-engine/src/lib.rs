// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::too_many_lines)
)]

//! Lot Engine - Rust Core Library
//!
//! Deterministic, risk-based lot size calculation. The core converts
//! (account balance, risk percentage, entry price, stop loss or pip
//! distance, instrument metadata) into a position sizing result, as a pure
//! function pipeline with no I/O and no shared mutable state.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: the calculation core
//!   - `instrument`: static instrument metadata and the injectable registry
//!   - `pips`: price distance ↔ pip distance conversion
//!   - `sizing`: validation rules and the lot size calculator
//!   - `format`: presentation-only number and currency rendering
//!
//! - **Config**: YAML configuration with environment variable
//!   interpolation, including instrument table overrides
//!
//! - **Infrastructure**: inbound adapters
//!   - `http`: axum JSON API exposing the core

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Configuration loading and validation.
pub mod config;

/// Domain layer - the pure calculation core.
pub mod domain;

/// Infrastructure layer - inbound adapters.
pub mod infrastructure;

/// Logging setup.
pub mod observability;

// Domain re-exports
pub use domain::format::{format_currency, format_number};
pub use domain::instrument::{Instrument, InstrumentError, InstrumentRegistry, PipScale};
pub use domain::pips::{TradeSide, pip_distance, price_from_pips};
pub use domain::sizing::{LotSizer, RuleViolation, SizingRequest, SizingResult};

// Infrastructure re-exports
pub use infrastructure::http::{AppState, create_router};
