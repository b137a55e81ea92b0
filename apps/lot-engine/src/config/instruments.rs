//! Instrument table construction from configuration.

use crate::domain::instrument::{Instrument, InstrumentRegistry};

use super::ConfigError;

/// Build the instrument registry: builtins first, then configured
/// definitions merged on top (insert or replace by id).
///
/// # Errors
///
/// Returns a [`ConfigError`] if a configured definition violates an
/// instrument invariant.
pub fn build_registry(definitions: &[Instrument]) -> Result<InstrumentRegistry, ConfigError> {
    let mut registry = InstrumentRegistry::builtin();
    for instrument in definitions {
        registry
            .register(instrument.clone())
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
    }
    Ok(registry)
}
