//! Signal catalog declarations
//!
//! A catalog is the static list of signals a vehicle profile needs from one
//! bus channel, plus the message frequency checks the external decoding
//! engine uses to flag stale messages. Both lists are built once at profile
//! construction and consumed verbatim by the engine - this crate never
//! performs the staleness check itself.

use crate::types::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One signal the decoding engine must provide each cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalSpec {
    /// Signal name within the message
    pub name: String,
    /// Name of the message carrying the signal
    pub message: String,
    /// Value the engine reports until the signal is first observed
    pub default: f64,
}

impl SignalSpec {
    pub fn new(name: impl Into<String>, message: impl Into<String>, default: f64) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            default,
        }
    }
}

/// Expected reception frequency for one message
///
/// The external engine flags the message as timed out when it stops
/// arriving at this rate. Declaring a check for a message a given vehicle
/// does not transmit causes spurious timeouts, so profile variants omit
/// checks along with the signals they exist for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageCheck {
    /// Name of the message to monitor
    pub message: String,
    /// Expected frequency in Hz
    pub frequency_hz: u32,
}

impl MessageCheck {
    pub fn new(message: impl Into<String>, frequency_hz: u32) -> Self {
        Self {
            message: message.into(),
            frequency_hz,
        }
    }
}

/// The ordered signal and check declarations for one bus channel
///
/// Immutable after construction. Construction fails if the same signal
/// name appears twice - a duplicate would make the per-cycle keyed view
/// ambiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalCatalog {
    channel: u8,
    signals: Vec<SignalSpec>,
    checks: Vec<MessageCheck>,
}

impl SignalCatalog {
    /// Build a catalog for one bus channel, validating the declarations
    pub fn new(channel: u8, signals: Vec<SignalSpec>, checks: Vec<MessageCheck>) -> Result<Self> {
        let mut seen = HashSet::new();
        for spec in &signals {
            if !seen.insert(spec.name.as_str()) {
                return Err(ConfigError::DuplicateSignal {
                    signal: spec.name.clone(),
                    channel,
                });
            }
        }

        log::debug!(
            "catalog for channel {}: {} signals, {} checks",
            channel,
            signals.len(),
            checks.len()
        );

        Ok(Self {
            channel,
            signals,
            checks,
        })
    }

    /// Build an empty catalog - a valid no-op declaration for a channel
    /// the profile currently needs nothing from
    pub fn empty(channel: u8) -> Self {
        Self {
            channel,
            signals: Vec::new(),
            checks: Vec::new(),
        }
    }

    /// Bus channel index these declarations apply to
    pub fn channel(&self) -> u8 {
        self.channel
    }

    /// Signals the decoding engine must decode, in declaration order
    pub fn signals(&self) -> &[SignalSpec] {
        &self.signals
    }

    /// Messages the decoding engine must timeout-monitor, in declaration order
    pub fn checks(&self) -> &[MessageCheck] {
        &self.checks
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty() && self.checks.is_empty()
    }
}
