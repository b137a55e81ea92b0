//! HTTP response DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::format;
use crate::domain::instrument::{Instrument, PipScale};
use crate::domain::sizing::SizingResult;

/// Account currency assumed for display strings.
const DISPLAY_CURRENCY: &str = "USD";

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Application version.
    pub version: String,
}

/// A single instrument definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentResponse {
    /// Unique identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Display symbol.
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
    /// Pip scale class.
    pub pip_scale: PipScale,
}

impl From<&Instrument> for InstrumentResponse {
    fn from(instrument: &Instrument) -> Self {
        Self {
            id: instrument.id.clone(),
            name: instrument.name.clone(),
            symbol: instrument.symbol.clone(),
            contract_size: instrument.contract_size,
            min_lot_size: instrument.min_lot_size,
            max_lot_size: instrument.max_lot_size,
            lot_step: instrument.lot_step,
            pip_value_per_lot: instrument.pip_value_per_lot,
            pip_scale: instrument.pip_scale,
        }
    }
}

/// Response listing the available instruments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListInstrumentsResponse {
    /// Instruments in registration order.
    pub instruments: Vec<InstrumentResponse>,
}

/// Pre-formatted display strings for a calculation outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayStrings {
    /// Lot size, e.g. "1.00".
    pub lot_size: String,
    /// Position notional, e.g. "$265,000.00".
    pub position_notional: String,
    /// Risk amount, e.g. "$200.00".
    pub risk_amount: String,
    /// Pip value, e.g. "$10.00".
    pub pip_value: String,
    /// Pip distance, e.g. "20.00".
    pub pip_distance: String,
}

/// Response from a lot size calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateResponse {
    /// Lot size rounded to the instrument's granularity.
    pub lot_size: Decimal,
    /// Total monetary exposure of the sized position.
    pub position_notional: Decimal,
    /// Monetary amount at risk.
    pub risk_amount: Decimal,
    /// Monetary value of a one-pip move for the sized position.
    pub pip_value: Decimal,
    /// Entry-to-stop distance in pips.
    pub pip_distance: Decimal,
    /// Whether the inputs passed validation.
    pub is_valid: bool,
    /// Human-readable validation messages. Empty iff valid.
    pub errors: Vec<String>,
    /// Display strings for the numeric outputs.
    pub display: DisplayStrings,
}

impl From<&SizingResult> for CalculateResponse {
    fn from(result: &SizingResult) -> Self {
        Self {
            lot_size: result.lot_size,
            position_notional: result.position_notional,
            risk_amount: result.risk_amount,
            pip_value: result.pip_value,
            pip_distance: result.pip_distance,
            is_valid: result.is_valid,
            errors: result.messages(),
            display: DisplayStrings {
                lot_size: format::format_number(result.lot_size, 2),
                position_notional: format::format_currency(
                    result.position_notional,
                    DISPLAY_CURRENCY,
                ),
                risk_amount: format::format_currency(result.risk_amount, DISPLAY_CURRENCY),
                pip_value: format::format_currency(result.pip_value, DISPLAY_CURRENCY),
                pip_distance: format::format_number(result.pip_distance, 2),
            },
        }
    }
}

/// Error body for rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
