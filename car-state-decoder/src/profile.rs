//! Vehicle profile and per-channel catalog construction
//!
//! A profile identifies the vehicle platform and tags which optional
//! sensor groups it carries. The catalog builders turn a profile into the
//! signal and check declarations for each bus channel; hardware a profile
//! lacks is omitted entirely (signals and checks both) so the external
//! engine never raises spurious timeouts for messages the car does not
//! transmit.

use crate::catalog::{MessageCheck, SignalCatalog, SignalSpec};
use crate::types::Result;
use serde::{Deserialize, Serialize};

/// Powertrain bus channel index
pub const PT_BUS: u8 = 0;
/// Forward camera bus channel index
pub const CAM_BUS: u8 = 2;

/// Message carrying the gear lever position
pub const GEAR_MESSAGE: &str = "SBW_ROT1";
/// Enumerated gear lever position signal within [`GEAR_MESSAGE`]
pub const GEAR_SIGNAL: &str = "DrvRqShftROT";

/// Identifies a vehicle platform and its optional sensor groups
///
/// The flags are tagged configuration, not behavior switches: each one
/// adds declarations to a channel catalog, and the state decoder itself
/// reads only the base signal set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    /// Platform fingerprint, used to select the description table
    pub fingerprint: String,

    /// Platform reports raw left/right speed sensors (SPEED_1)
    #[serde(default)]
    pub raw_speed_sensors: bool,

    /// Platform exposes EPS torque and fault diagnostics (EPS_STATUS)
    #[serde(default)]
    pub eps_diagnostics: bool,

    /// Forward camera transmits LKAS command/heartbeat on the camera bus
    #[serde(default)]
    pub camera_lkas: bool,
}

impl VehicleProfile {
    /// Create a base profile with all optional sensor groups disabled
    pub fn new(fingerprint: impl Into<String>) -> Self {
        Self {
            fingerprint: fingerprint.into(),
            raw_speed_sensors: false,
            eps_diagnostics: false,
            camera_lkas: false,
        }
    }

    /// Builder method: enable the raw speed sensor declarations
    pub fn with_raw_speed_sensors(mut self, enabled: bool) -> Self {
        self.raw_speed_sensors = enabled;
        self
    }

    /// Builder method: enable the EPS diagnostic declarations
    pub fn with_eps_diagnostics(mut self, enabled: bool) -> Self {
        self.eps_diagnostics = enabled;
        self
    }

    /// Builder method: enable the camera LKAS declarations
    pub fn with_camera_lkas(mut self, enabled: bool) -> Self {
        self.camera_lkas = enabled;
        self
    }
}

/// Build the powertrain bus catalog for a profile
pub fn pt_catalog(profile: &VehicleProfile) -> Result<SignalCatalog> {
    let mut signals = vec![
        // signal name, message, default
        SignalSpec::new("DrvRqShftROT", "SBW_ROT1", 0.0),
        SignalSpec::new("DRV_AJAR", "CBC_PT1", 0.0),
        SignalSpec::new("PSG_AJAR", "CBC_PT1", 0.0),
        SignalSpec::new("L_R_AJAR", "CBC_PT1", 0.0),
        SignalSpec::new("R_R_AJAR", "CBC_PT1", 0.0),
        SignalSpec::new("BrkPdl_Stat", "ESP_A1", 0.0),
        SignalSpec::new("Rel_Pdl_ENG", "ECM_CRUISE_MAP", 0.0),
        SignalSpec::new("WhlRPM_FL", "ESP_A6", 0.0),
        SignalSpec::new("WhlRPM_RR", "ESP_A6", 0.0),
        SignalSpec::new("WhlRPM_RL", "ESP_A6", 0.0),
        SignalSpec::new("WhlRPM_FR", "ESP_A6", 0.0),
        SignalSpec::new("LRW", "SCCM_STW_ANGL_STAT", 0.0),
        SignalSpec::new("VLRW", "SCCM_STW_ANGL_STAT", 0.0),
        SignalSpec::new("TurnIndLvr_Stat", "StW_Actn_Rq", 0.0),
        SignalSpec::new("ACC_Engd", "DAS_A3", 0.0),
        SignalSpec::new("HiBmLvr_Stat", "StW_Actn_Rq", 0.0),
        SignalSpec::new("SetSpeed_KPH", "DAS_A4", 0.0),
        SignalSpec::new("CRUISE_EGD", "ECM_CRUISE_MAP", 0.0),
        SignalSpec::new("TRAC_PSD", "GW_I_C1", 0.0),
        SignalSpec::new("DrvSbltUnFltr", "ORC_A1", 0.0),
    ];

    let mut checks = vec![
        // message, frequency Hz
        MessageCheck::new("ESP_A1", 50),
        MessageCheck::new("ESP_A6", 50),
        MessageCheck::new("SCCM_STW_ANGL_STAT", 100),
        MessageCheck::new("ACC_2", 50),
        MessageCheck::new("GEAR", 50),
        MessageCheck::new("ECM_CRUISE_MAP", 50),
        MessageCheck::new("DAS_A4", 15),
        MessageCheck::new("StW_Actn_Rq", 10),
        MessageCheck::new("ORC_A1", 2),
        MessageCheck::new("CBC_PT1", 1),
        MessageCheck::new("GW_I_C1", 1),
    ];

    if profile.raw_speed_sensors {
        signals.push(SignalSpec::new("SPEED_LEFT", "SPEED_1", 0.0));
        signals.push(SignalSpec::new("SPEED_RIGHT", "SPEED_1", 0.0));
        checks.push(MessageCheck::new("SPEED_1", 100));
    }

    if profile.eps_diagnostics {
        signals.push(SignalSpec::new("TORQUE_DRIVER", "EPS_STATUS", 0.0));
        signals.push(SignalSpec::new("TORQUE_MOTOR", "EPS_STATUS", 0.0));
        signals.push(SignalSpec::new("LKAS_STATE", "EPS_STATUS", 1.0));
        signals.push(SignalSpec::new("COUNTER", "EPS_STATUS", -1.0));
        checks.push(MessageCheck::new("EPS_STATUS", 100));
    }

    SignalCatalog::new(PT_BUS, signals, checks)
}

/// Build the camera bus catalog for a profile
///
/// Zero declarations unless the profile tags the camera LKAS group - an
/// empty catalog is a valid configuration for this channel, not a
/// missing feature.
pub fn cam_catalog(profile: &VehicleProfile) -> Result<SignalCatalog> {
    if !profile.camera_lkas {
        return Ok(SignalCatalog::empty(CAM_BUS));
    }

    let signals = vec![
        SignalSpec::new("COUNTER", "LKAS_COMMAND", -1.0),
        SignalSpec::new("CAR_MODEL", "LKAS_HUD", -1.0),
        SignalSpec::new("LKAS_STATUS_OK", "LKAS_HEARTBIT", -1.0),
    ];

    let checks = vec![
        MessageCheck::new("LKAS_COMMAND", 100),
        MessageCheck::new("LKAS_HEARTBIT", 10),
        MessageCheck::new("LKAS_HUD", 4),
    ];

    SignalCatalog::new(CAM_BUS, signals, checks)
}
