//! Risk-based lot size calculation.
//!
//! The central pipeline: validate the parameter bundle, derive the risk
//! amount and pip distance, solve `risk = lots x pip value x pip distance`
//! for lots, then round to the instrument's lot step and clamp to its
//! tradable bounds.
//!
//! # Example
//!
//! ```rust,ignore
//! use lot_engine::{InstrumentRegistry, LotSizer, SizingRequest};
//! use rust_decimal_macros::dec;
//!
//! let registry = InstrumentRegistry::builtin();
//! let gold = registry.get("XAUUSD").unwrap();
//!
//! let request = SizingRequest::from_prices(
//!     dec!(10000), // account balance
//!     dec!(2),     // risk 2%
//!     dec!(2650),  // entry
//!     dec!(2630),  // stop loss
//!     gold,
//! );
//!
//! let result = LotSizer::new().calculate(&request);
//! assert_eq!(result.lot_size, dec!(1.00));
//! ```

mod calculator;
mod types;
mod validation;

pub use calculator::LotSizer;
pub use types::{SizingRequest, SizingResult};
pub use validation::{RuleViolation, validate};
