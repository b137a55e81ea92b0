//! Tradable instrument metadata.
//!
//! An [`Instrument`] is defined once at startup and never mutated; the
//! calculator only ever borrows it. Definition invariants are enforced at
//! registration time, not at calculation time.

mod registry;

pub use registry::InstrumentRegistry;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scale relating one pip to one unit of quoted price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PipScale {
    /// One pip equals one full price point (metals such as gold).
    Point,
    /// One pip equals 1/10000 of a price point (standard currency pairs).
    TenThousandth,
}

impl PipScale {
    /// Number of pips contained in one full price point. Never zero.
    #[must_use]
    pub fn pips_per_point(self) -> Decimal {
        match self {
            Self::Point => Decimal::ONE,
            Self::TenThousandth => dec!(10000),
        }
    }
}

/// Rejected instrument definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstrumentError {
    /// Contract size must be positive.
    #[error("instrument '{id}': contract size must be positive")]
    NonPositiveContractSize {
        /// Offending instrument id.
        id: String,
    },
    /// Pip value per lot must be positive.
    #[error("instrument '{id}': pip value per lot must be positive")]
    NonPositivePipValue {
        /// Offending instrument id.
        id: String,
    },
    /// Lot step must be positive.
    #[error("instrument '{id}': lot step must be positive")]
    NonPositiveLotStep {
        /// Offending instrument id.
        id: String,
    },
    /// Minimum lot size must not exceed the maximum.
    #[error("instrument '{id}': min lot size exceeds max lot size")]
    InvertedLotBounds {
        /// Offending instrument id.
        id: String,
    },
    /// Minimum lot size must not be negative.
    #[error("instrument '{id}': min lot size must not be negative")]
    NegativeMinLotSize {
        /// Offending instrument id.
        id: String,
    },
    /// Reference price must be positive.
    #[error("instrument '{id}': reference price must be positive")]
    NonPositiveReferencePrice {
        /// Offending instrument id.
        id: String,
    },
}

/// Static trading metadata for a single tradable instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    /// Unique identifier, e.g. "XAUUSD".
    pub id: String,
    /// Human-readable name, e.g. "Gold vs US Dollar".
    pub name: String,
    /// Display symbol, e.g. "XAU/USD".
    pub symbol: String,
    /// Units per one lot.
    pub contract_size: Decimal,
    /// Smallest tradable lot size.
    pub min_lot_size: Decimal,
    /// Largest tradable lot size.
    pub max_lot_size: Decimal,
    /// Granularity of tradable lot sizes.
    pub lot_step: Decimal,
    /// Monetary value of a one-pip move for one lot.
    pub pip_value_per_lot: Decimal,
    /// Pip scale class for price/pip conversion.
    pub pip_scale: PipScale,
    /// Nominal entry price used when sizing from a pip distance.
    pub reference_price: Decimal,
}

impl Instrument {
    /// Check the definition invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), InstrumentError> {
        let id = || self.id.clone();
        if self.contract_size <= Decimal::ZERO {
            return Err(InstrumentError::NonPositiveContractSize { id: id() });
        }
        if self.pip_value_per_lot <= Decimal::ZERO {
            return Err(InstrumentError::NonPositivePipValue { id: id() });
        }
        if self.lot_step <= Decimal::ZERO {
            return Err(InstrumentError::NonPositiveLotStep { id: id() });
        }
        if self.min_lot_size < Decimal::ZERO {
            return Err(InstrumentError::NegativeMinLotSize { id: id() });
        }
        if self.min_lot_size > self.max_lot_size {
            return Err(InstrumentError::InvertedLotBounds { id: id() });
        }
        if self.reference_price <= Decimal::ZERO {
            return Err(InstrumentError::NonPositiveReferencePrice { id: id() });
        }
        Ok(())
    }
}
