//! Per-cycle vehicle state decoding
//!
//! [`CarStateDecoder`] owns the per-profile declarations (catalogs and the
//! gear enumeration table), all immutable after construction, and turns
//! one cycle's decoded signal values into a [`VehicleState`] snapshot.
//! `decode` is pure: it never blocks, performs no I/O, and holds no state
//! across calls. Out-of-range ordinals fall through each comparison's
//! default branch instead of raising.

use crate::catalog::SignalCatalog;
use crate::enums::{EnumSource, EnumTable};
use crate::profile::{self, VehicleProfile, GEAR_MESSAGE, GEAR_SIGNAL};
use crate::signals::SignalSource;
use crate::types::{CruiseState, GearShifter, Result, VehicleState, WheelSpeeds};
use crate::units;

/// BrkPdl_Stat encoding for the pedal being applied by the driver.
/// Other ordinals cover automated braking and are not treated as pressed.
const BRAKE_HUMAN_PRESSED: i64 = 5;

/// DrvSbltUnFltr encoding for an unlatched driver seatbelt
const SEATBELT_UNLATCHED: i64 = 1;

/// TRAC_PSD encoding for traction control suspended by the driver
const TRACTION_SUSPENDED: i64 = 1;

/// TurnIndLvr_Stat lever positions
const TURN_LEVER_LEFT: i64 = 1;
const TURN_LEVER_RIGHT: i64 = 2;

/// ACC_Engd encoding while ACC is engaged (cluster icon green)
const ACC_ENGAGED: i64 = 7;

/// Accelerator positions at or below this read as released; absorbs
/// sensor noise and zero offset
const GAS_PEDAL_TOLERANCE: f64 = 1e-5;

/// Per-profile state decoder
///
/// Construct once at vehicle-profile initialization; run [`decode`] once
/// per reception cycle.
///
/// [`decode`]: CarStateDecoder::decode
pub struct CarStateDecoder {
    catalog: SignalCatalog,
    cam_catalog: SignalCatalog,
    shifter_values: EnumTable,
}

impl CarStateDecoder {
    /// Build the decoder for a profile, loading the gear enumeration
    /// table from the given source
    pub fn new(profile: &VehicleProfile, enums: &impl EnumSource) -> Result<Self> {
        let catalog = profile::pt_catalog(profile)?;
        let cam_catalog = profile::cam_catalog(profile)?;
        let shifter_values = enums.enum_table(GEAR_MESSAGE, GEAR_SIGNAL)?;

        log::info!(
            "state decoder ready for '{}': {} pt signals, {} cam signals, {} gear labels",
            profile.fingerprint,
            catalog.signals().len(),
            cam_catalog.signals().len(),
            shifter_values.len()
        );

        Ok(Self {
            catalog,
            cam_catalog,
            shifter_values,
        })
    }

    /// Powertrain bus declarations, consumed verbatim by the decoding engine
    pub fn catalog(&self) -> &SignalCatalog {
        &self.catalog
    }

    /// Camera bus declarations
    pub fn cam_catalog(&self) -> &SignalCatalog {
        &self.cam_catalog
    }

    /// Decode one cycle's signal values into a state snapshot
    ///
    /// Total for any input: malformed or out-of-range values within the
    /// declared signal set resolve to `false`/`Unknown`, never an error.
    /// Freshness of the input is the caller's responsibility - staleness
    /// is flagged by the external engine against the declared checks.
    pub fn decode(&self, signals: &impl SignalSource) -> VehicleState {
        let door_open = signals.flag("CBC_PT1", "DRV_AJAR")
            || signals.flag("CBC_PT1", "PSG_AJAR")
            || signals.flag("CBC_PT1", "L_R_AJAR")
            || signals.flag("CBC_PT1", "R_R_AJAR");
        let seatbelt_unlatched =
            signals.ordinal("ORC_A1", "DrvSbltUnFltr") == SEATBELT_UNLATCHED;

        let brake_pressed = signals.ordinal("ESP_A1", "BrkPdl_Stat") == BRAKE_HUMAN_PRESSED;
        let gas = signals.value("ECM_CRUISE_MAP", "Rel_Pdl_ENG");

        let esp_disabled = signals.ordinal("GW_I_C1", "TRAC_PSD") == TRACTION_SUSPENDED;

        let wheel_speeds = WheelSpeeds {
            fl: signals.value("ESP_A6", "WhlRPM_FL"),
            fr: signals.value("ESP_A6", "WhlRPM_FR"),
            rl: signals.value("ESP_A6", "WhlRPM_RL"),
            rr: signals.value("ESP_A6", "WhlRPM_RR"),
        };

        let turn_lever = signals.ordinal("StW_Actn_Rq", "TurnIndLvr_Stat");

        let cruise_enabled = signals.ordinal("DAS_A3", "ACC_Engd") == ACC_ENGAGED;
        let cruise = CruiseState {
            enabled: cruise_enabled,
            // availability is not decoded separately yet
            available: cruise_enabled,
            speed: signals.value("DAS_A4", "SetSpeed_KPH") * units::KPH_TO_MS,
            non_adaptive: signals.value("ECM_CRUISE_MAP", "CRUISE_EGD"),
        };

        VehicleState {
            door_open,
            seatbelt_unlatched,
            brake_pressed,
            brake: 0.0,
            brake_lights: brake_pressed,
            gas,
            gas_pressed: gas > GAS_PEDAL_TOLERANCE,
            esp_disabled,
            wheel_speeds,
            left_blinker: turn_lever == TURN_LEVER_LEFT,
            right_blinker: turn_lever == TURN_LEVER_RIGHT,
            steering_angle_deg: signals.value("SCCM_STW_ANGL_STAT", "LRW"),
            steering_rate_deg: signals.value("SCCM_STW_ANGL_STAT", "VLRW"),
            gear_shifter: self.parse_gear(signals.ordinal(GEAR_MESSAGE, GEAR_SIGNAL)),
            cruise,
            generic_toggle: signals.flag("StW_Actn_Rq", "HiBmLvr_Stat"),
        }
    }

    /// Resolve a raw gear ordinal through the enumeration table and the
    /// canonicalizing label parser
    fn parse_gear(&self, ordinal: i64) -> GearShifter {
        match self.shifter_values.resolve(ordinal) {
            Some(label) => GearShifter::from_label(label),
            None => GearShifter::Unknown,
        }
    }
}
