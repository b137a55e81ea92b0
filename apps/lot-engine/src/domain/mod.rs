//! Domain layer - pure calculation core with no I/O.
//!
//! Every operation here is a pure function over its explicit inputs. The
//! instrument table is immutable after startup, so reads are safe from any
//! number of concurrent callers.

pub mod format;
pub mod instrument;
pub mod pips;
pub mod sizing;
