//! Car State Decoder Library
//!
//! Translates decoded control-bus signals into a structured snapshot of
//! vehicle state (doors, pedals, wheel speeds, steering, cruise control,
//! turn signals, gear position).
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on state decoding:
//! - Declares, per vehicle profile and bus channel, which signals the
//!   external decoding engine must provide and which messages it must
//!   timeout-monitor
//! - Resolves enumerated ordinals through description-table value tables
//! - Produces one immutable [`VehicleState`] per reception cycle
//!
//! The library does NOT:
//! - Perform bus I/O or bit-level frame decoding
//! - Check message staleness (it only declares the expected frequencies)
//! - Send any commands back to the vehicle
//!
//! Those concerns belong to the external bus decoding engine, which
//! consumes the catalogs verbatim and feeds decoded values back in
//! through [`SignalSource`].
//!
//! # Example Usage
//!
//! ```
//! use car_state_decoder::{
//!     CarStateDecoder, EnumTable, MapEnumSource, SignalFrame, VehicleProfile,
//! };
//!
//! // Enumeration tables normally come from the platform DBC (see
//! // `DbcEnumSource`); a map source works for synthetic profiles.
//! let mut enums = MapEnumSource::new();
//! enums.insert(
//!     "SBW_ROT1",
//!     "DrvRqShftROT",
//!     EnumTable::from_iter([(0, "PARK".to_string()), (3, "DRIVE".to_string())]),
//! );
//!
//! let profile = VehicleProfile::new("PACIFICA_2018");
//! let decoder = CarStateDecoder::new(&profile, &enums).unwrap();
//!
//! // Each cycle: the engine's latest values, pre-populated with defaults
//! let mut frame = SignalFrame::with_defaults(decoder.catalog());
//! frame.set("SBW_ROT1", "DrvRqShftROT", 3.0);
//! frame.set("DAS_A4", "SetSpeed_KPH", 100.0);
//!
//! let state = decoder.decode(&frame);
//! assert_eq!(state.gear_shifter.to_string(), "drive");
//! ```

// Public modules
pub mod catalog;
pub mod dbc;
pub mod decoder;
pub mod enums;
pub mod profile;
pub mod signals;
pub mod types;
pub mod units;

// Re-export main types for convenience
pub use catalog::{MessageCheck, SignalCatalog, SignalSpec};
pub use dbc::DbcEnumSource;
pub use decoder::CarStateDecoder;
pub use enums::{EnumSource, EnumTable, MapEnumSource};
pub use profile::{VehicleProfile, CAM_BUS, PT_BUS};
pub use signals::{SignalFrame, SignalSource};
pub use types::{
    ConfigError, CruiseState, GearShifter, Result, VehicleState, WheelSpeeds,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
