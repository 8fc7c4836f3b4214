//! Per-cycle decoded signal view
//!
//! The external bus decoding engine owns reception and bit-level decoding;
//! each cycle it exposes the latest value of every declared signal, keyed
//! by (message, signal). [`SignalSource`] is that boundary as a trait so
//! the state decoder can be driven from synthetic maps in tests, and
//! [`SignalFrame`] is the plain map implementation.

use crate::catalog::SignalCatalog;
use std::collections::HashMap;

/// Read access to the latest decoded signal values
///
/// Lookups are total: a source must return a value for any key, falling
/// back to the declared default (or zero) for signals not yet observed.
/// The decode cycle never treats a lookup as fallible.
pub trait SignalSource {
    /// Latest value of `signal` within `message`
    fn value(&self, message: &str, signal: &str) -> f64;

    /// Latest value truncated to its raw integer ordinal, for enumerated
    /// signals
    fn ordinal(&self, message: &str, signal: &str) -> i64 {
        self.value(message, signal) as i64
    }

    /// Boolean coercion: any nonzero value reads as true
    fn flag(&self, message: &str, signal: &str) -> bool {
        self.ordinal(message, signal) != 0
    }
}

/// A snapshot of decoded signal values for one reception cycle
///
/// Pre-populated with a catalog's declared defaults so that every lookup
/// resolves even before the first frame of a message arrives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignalFrame {
    values: HashMap<(String, String), f64>,
}

impl SignalFrame {
    /// Create an empty frame; all lookups resolve to 0.0
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a frame pre-populated with the catalog's declared defaults
    pub fn with_defaults(catalog: &SignalCatalog) -> Self {
        let values = catalog
            .signals()
            .iter()
            .map(|spec| ((spec.message.clone(), spec.name.clone()), spec.default))
            .collect();
        Self { values }
    }

    /// Store the latest decoded value for a signal
    pub fn set(&mut self, message: impl Into<String>, signal: impl Into<String>, value: f64) {
        self.values.insert((message.into(), signal.into()), value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SignalSource for SignalFrame {
    fn value(&self, message: &str, signal: &str) -> f64 {
        self.values
            .get(&(message.to_string(), signal.to_string()))
            .copied()
            .unwrap_or(0.0)
    }
}
