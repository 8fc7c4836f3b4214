//! End-to-end decode scenarios
//!
//! Drives the decoder the way the reception loop does: build a profile
//! once, then feed full signal frames through `decode` and check the
//! resulting snapshots.

use car_state_decoder::{
    CarStateDecoder, EnumTable, GearShifter, MapEnumSource, SignalFrame, VehicleProfile,
};

fn pacifica_decoder() -> CarStateDecoder {
    let mut enums = MapEnumSource::new();
    enums.insert(
        "SBW_ROT1",
        "DrvRqShftROT",
        EnumTable::from_iter([
            (0, "PARK".to_string()),
            (1, "REVERSE".to_string()),
            (2, "NEUTRAL".to_string()),
            (3, "DRIVE".to_string()),
        ]),
    );

    let profile = VehicleProfile::new("PACIFICA_2018");
    CarStateDecoder::new(&profile, &enums).unwrap()
}

#[test]
fn driving_cycle_snapshot() {
    let decoder = pacifica_decoder();

    // driver door ajar, human brake applied, left turn signaled, ACC
    // engaged at 100 km/h, lever in drive
    let mut frame = SignalFrame::with_defaults(decoder.catalog());
    frame.set("CBC_PT1", "DRV_AJAR", 1.0);
    frame.set("ESP_A1", "BrkPdl_Stat", 5.0);
    frame.set("ECM_CRUISE_MAP", "Rel_Pdl_ENG", 0.0);
    frame.set("StW_Actn_Rq", "TurnIndLvr_Stat", 1.0);
    frame.set("DAS_A3", "ACC_Engd", 7.0);
    frame.set("DAS_A4", "SetSpeed_KPH", 100.0);
    frame.set("SBW_ROT1", "DrvRqShftROT", 3.0);

    let state = decoder.decode(&frame);

    assert!(state.door_open);
    assert!(state.brake_pressed);
    assert!(state.brake_lights);
    assert!(!state.gas_pressed);
    assert!(state.left_blinker);
    assert!(!state.right_blinker);
    assert!(state.cruise.enabled);
    assert!(state.cruise.available);
    assert!((state.cruise.speed - 27.78).abs() < 0.01);
    assert_eq!(state.gear_shifter, GearShifter::Drive);
}

#[test]
fn unknown_gear_ordinal_yields_unknown() {
    let decoder = pacifica_decoder();

    let mut frame = SignalFrame::with_defaults(decoder.catalog());
    frame.set("SBW_ROT1", "DrvRqShftROT", 99.0);

    let state = decoder.decode(&frame);
    assert_eq!(state.gear_shifter, GearShifter::Unknown);
}

#[test]
fn decode_is_total_over_hostile_inputs() {
    let decoder = pacifica_decoder();

    // sweep every declared signal through out-of-range and non-finite
    // values; decode must produce a snapshot for all of them
    let hostile = [-1.0e9, -1.0, 0.5, 255.0, 1.0e12, f64::NAN, f64::INFINITY];
    for &value in &hostile {
        let mut frame = SignalFrame::with_defaults(decoder.catalog());
        for spec in decoder.catalog().signals() {
            frame.set(spec.message.clone(), spec.name.clone(), value);
        }
        let state = decoder.decode(&frame);
        assert!(!(state.left_blinker && state.right_blinker));
        assert_eq!(state.brake_lights, state.brake_pressed);
        assert_eq!(state.brake, 0.0);
    }

    // an entirely empty view decodes too
    let state = decoder.decode(&SignalFrame::new());
    assert_eq!(state.gear_shifter, GearShifter::Park);
}

#[test]
fn snapshot_serializes_for_downstream_consumers() {
    let decoder = pacifica_decoder();
    let mut frame = SignalFrame::with_defaults(decoder.catalog());
    frame.set("SBW_ROT1", "DrvRqShftROT", 2.0);
    frame.set("ESP_A6", "WhlRPM_FL", 512.0);

    let state = decoder.decode(&frame);
    let json = serde_json::to_string(&state).unwrap();
    let back: car_state_decoder::VehicleState = serde_json::from_str(&json).unwrap();

    assert_eq!(back, state);
    assert!(json.contains("\"neutral\""));
}

#[test]
fn catalogs_are_stable_across_cycles() {
    let decoder = pacifica_decoder();

    let before: Vec<_> = decoder
        .catalog()
        .signals()
        .iter()
        .map(|s| (s.message.clone(), s.name.clone()))
        .collect();

    for i in 0..100 {
        let mut frame = SignalFrame::with_defaults(decoder.catalog());
        frame.set("ESP_A1", "BrkPdl_Stat", (i % 8) as f64);
        let _ = decoder.decode(&frame);
    }

    let after: Vec<_> = decoder
        .catalog()
        .signals()
        .iter()
        .map(|s| (s.message.clone(), s.name.clone()))
        .collect();
    assert_eq!(before, after);
}
