//! Injectable instrument lookup table.
//!
//! A simple ordered key-value store: new instruments can be added without
//! touching calculator logic. Built once at startup and shared read-only.

use rust_decimal_macros::dec;

use super::{Instrument, InstrumentError, PipScale};

/// Ordered instrument table, immutable after startup.
#[derive(Debug, Clone, Default)]
pub struct InstrumentRegistry {
    instruments: Vec<Instrument>,
}

impl InstrumentRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the built-in instruments.
    ///
    /// The first entry (gold) is the default instrument.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for instrument in builtin_instruments() {
            debug_assert!(instrument.validate().is_ok());
            registry.insert(instrument);
        }
        registry
    }

    /// Insert an instrument, replacing any existing definition with the
    /// same id.
    ///
    /// # Errors
    ///
    /// Returns an [`InstrumentError`] if the definition violates an
    /// invariant; the registry is left unchanged.
    pub fn register(&mut self, instrument: Instrument) -> Result<(), InstrumentError> {
        instrument.validate()?;
        self.insert(instrument);
        Ok(())
    }

    /// Look up an instrument by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Instrument> {
        self.instruments.iter().find(|i| i.id == id)
    }

    /// All instruments, in registration order.
    #[must_use]
    pub fn all(&self) -> &[Instrument] {
        &self.instruments
    }

    /// The first registered instrument, if any.
    #[must_use]
    pub fn default_instrument(&self) -> Option<&Instrument> {
        self.instruments.first()
    }

    /// Number of registered instruments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    fn insert(&mut self, instrument: Instrument) {
        if let Some(existing) = self
            .instruments
            .iter_mut()
            .find(|i| i.id == instrument.id)
        {
            *existing = instrument;
        } else {
            self.instruments.push(instrument);
        }
    }
}

fn builtin_instruments() -> Vec<Instrument> {
    vec![
        Instrument {
            id: "XAUUSD".to_string(),
            name: "Gold vs US Dollar".to_string(),
            symbol: "XAU/USD".to_string(),
            contract_size: dec!(100), // 100 ounces
            min_lot_size: dec!(0.01),
            max_lot_size: dec!(100),
            lot_step: dec!(0.01),
            pip_value_per_lot: dec!(10), // $10 per pip for 1 lot
            pip_scale: PipScale::Point,
            reference_price: dec!(2650),
        },
        Instrument {
            id: "EURUSD".to_string(),
            name: "Euro vs US Dollar".to_string(),
            symbol: "EUR/USD".to_string(),
            contract_size: dec!(100000),
            min_lot_size: dec!(0.01),
            max_lot_size: dec!(100),
            lot_step: dec!(0.01),
            pip_value_per_lot: dec!(10),
            pip_scale: PipScale::TenThousandth,
            reference_price: dec!(1.0545),
        },
        Instrument {
            id: "GBPUSD".to_string(),
            name: "British Pound vs US Dollar".to_string(),
            symbol: "GBP/USD".to_string(),
            contract_size: dec!(100000),
            min_lot_size: dec!(0.01),
            max_lot_size: dec!(100),
            lot_step: dec!(0.01),
            pip_value_per_lot: dec!(10),
            pip_scale: PipScale::TenThousandth,
            reference_price: dec!(1.0545),
        },
    ]
}
