//! Core types for the vehicle state decoder library
//!
//! This module defines the state snapshot the decoder emits each reception
//! cycle and the error taxonomy for profile construction. The decoder is
//! stateless between cycles - every `VehicleState` is a fresh value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for profile construction operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while building a vehicle profile
///
/// All of these are fatal at construction time: a profile that fails to
/// build cannot be used. Out-of-range sensor values during a decode cycle
/// are never errors - see [`crate::decoder::CarStateDecoder::decode`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("duplicate signal '{signal}' in catalog for channel {channel}")]
    DuplicateSignal { signal: String, channel: u8 },

    #[error("no enumeration table for signal '{signal}' in message '{message}'")]
    MissingEnumTable { message: String, signal: String },

    #[error("failed to parse DBC file: {0}")]
    DbcParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Canonical gear lever positions
///
/// Vendor description tables label the shifter ordinals with their own
/// strings ("PARK", "P", "Drive", ...). [`GearShifter::from_label`]
/// canonicalizes those into this set; anything it cannot place maps to
/// `Unknown`, as does an ordinal absent from the enumeration table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GearShifter {
    Park,
    Reverse,
    Neutral,
    Drive,
    #[default]
    Unknown,
}

impl GearShifter {
    /// Map a vendor-specific shifter label to the canonical gear set
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "P" | "PARK" => GearShifter::Park,
            "R" | "REVERSE" => GearShifter::Reverse,
            "N" | "NEUTRAL" => GearShifter::Neutral,
            "D" | "DRIVE" => GearShifter::Drive,
            _ => GearShifter::Unknown,
        }
    }
}

impl fmt::Display for GearShifter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GearShifter::Park => write!(f, "park"),
            GearShifter::Reverse => write!(f, "reverse"),
            GearShifter::Neutral => write!(f, "neutral"),
            GearShifter::Drive => write!(f, "drive"),
            GearShifter::Unknown => write!(f, "unknown"),
        }
    }
}

/// Per-wheel speed readings, raw RPM as reported by the ESP unit
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WheelSpeeds {
    pub fl: f64,
    pub fr: f64,
    pub rl: f64,
    pub rr: f64,
}

/// Adaptive cruise control state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CruiseState {
    /// True while ACC is engaged (cluster icon green)
    pub enabled: bool,
    /// Currently defined identically to `enabled`; kept separate because
    /// richer availability states exist upstream but are not yet decoded
    pub available: bool,
    /// Set speed in m/s, converted from the km/h value on the bus
    pub speed: f64,
    /// Raw cruise mode code. The full value space is not characterized
    /// (0 is off, 1-2 non-adaptive, 3-4 adaptive have been observed), so
    /// it is passed through unmodified rather than mapped to an enum.
    pub non_adaptive: f64,
}

/// One immutable snapshot of decoded vehicle state
///
/// Produced fresh on every decode cycle. Fields without a live source on
/// this platform (`brake`) carry a fixed neutral value rather than being
/// left out, so downstream consumers see a fully populated snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VehicleState {
    /// True if any of the four doors is ajar
    pub door_open: bool,
    /// True if the driver seatbelt is unlatched
    pub seatbelt_unlatched: bool,

    /// True only for the human-applied brake pedal encoding
    pub brake_pressed: bool,
    /// Brake pedal effort. Not sourced from the bus; always 0.
    pub brake: f64,
    /// Mirrors `brake_pressed`
    pub brake_lights: bool,

    /// Accelerator pedal position, normalized
    pub gas: f64,
    /// True when `gas` exceeds the pedal noise tolerance
    pub gas_pressed: bool,

    /// True while traction control is suspended by the driver
    pub esp_disabled: bool,

    pub wheel_speeds: WheelSpeeds,

    pub left_blinker: bool,
    pub right_blinker: bool,

    /// Steering wheel angle in degrees
    pub steering_angle_deg: f64,
    /// Steering wheel rate in degrees per second
    pub steering_rate_deg: f64,

    pub gear_shifter: GearShifter,

    pub cruise: CruiseState,

    /// High beam lever state
    pub generic_toggle: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gear_label_canonicalization() {
        assert_eq!(GearShifter::from_label("PARK"), GearShifter::Park);
        assert_eq!(GearShifter::from_label("p"), GearShifter::Park);
        assert_eq!(GearShifter::from_label("Reverse"), GearShifter::Reverse);
        assert_eq!(GearShifter::from_label(" N "), GearShifter::Neutral);
        assert_eq!(GearShifter::from_label("drive"), GearShifter::Drive);
        assert_eq!(GearShifter::from_label("SPORT"), GearShifter::Unknown);
        assert_eq!(GearShifter::from_label(""), GearShifter::Unknown);
    }

    #[test]
    fn test_gear_display() {
        assert_eq!(format!("{}", GearShifter::Drive), "drive");
        assert_eq!(format!("{}", GearShifter::Unknown), "unknown");
    }

    #[test]
    fn test_default_state_is_neutral() {
        let state = VehicleState::default();
        assert!(!state.door_open);
        assert!(!state.brake_pressed);
        assert_eq!(state.brake, 0.0);
        assert_eq!(state.gear_shifter, GearShifter::Unknown);
        assert_eq!(state.wheel_speeds, WheelSpeeds::default());
    }
}
