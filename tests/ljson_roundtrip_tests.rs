//! Roundtrip-Tests: LJSON-Text → LandmarkGroup → LJSON-Text.

use glam::DVec3;
use landmark_editor::{
    AtomicCoordinator, Dimensionality, LJson, LandmarkError, LandmarkGroup, MemoryBackend,
    parse_ljson, write_ljson,
};

const FACE_01: &str = include_str!("fixtures/data/landmarks/face_01_face.ljson");

#[test]
fn test_fixture_survives_group_roundtrip() {
    let parsed = parse_ljson(FACE_01).expect("Fixture gültig");
    let group = LandmarkGroup::new("face_01", "face", &parsed).expect("Snapshot gültig");

    let written = write_ljson(&group.to_ljson()).expect("Schreiben erfolgreich");
    let reparsed = parse_ljson(&written).expect("Geschriebenes LJSON gültig");

    assert_eq!(reparsed, parsed);
    assert_eq!(group.dims(), Dimensionality::Two);
}

#[test]
fn test_fixture_labels_and_flags_are_preserved() {
    let parsed = parse_ljson(FACE_01).expect("Fixture gültig");
    let group = LandmarkGroup::new("face_01", "face", &parsed).expect("Snapshot gültig");

    let names: Vec<&str> = group.labels().iter().map(|l| l.label()).collect();
    assert_eq!(names, vec!["left_eye", "right_eye", "mouth"]);
    assert_eq!(group.labels()[2].mask(), &[6, 7]);
    assert!(group.landmarks()[1].is_bad());
    assert!(group.landmarks()[7].is_invisible());
    assert!(group.landmarks()[3].is_empty());
}

#[test]
fn test_three_dimensional_snapshot_roundtrip() {
    let text = r#"{
        "version": 2,
        "landmarks": {
            "points": [[0.5, 1.5, -2.5], [null, null, null]],
            "connectivity": [[0, 1]],
            "invisible": [false, false],
            "bad": [false, false]
        },
        "labels": [{ "label": "tip", "mask": [0, 1] }]
    }"#;

    let parsed = parse_ljson(text).expect("LJSON gültig");
    let group = LandmarkGroup::new("mesh", "hand", &parsed).expect("Snapshot gültig");
    assert_eq!(group.dims(), Dimensionality::Three);
    assert_eq!(group.to_ljson(), parsed);
}

#[test]
fn test_rejected_non_finite_edits_keep_saved_file_loadable() {
    let atomic = AtomicCoordinator::new();
    let mut backend = MemoryBackend::new();
    let mut group =
        LandmarkGroup::new("img", "pair", &LJson::empty(2, Dimensionality::Two)).expect("gültig");

    assert_eq!(
        group.insert_new(DVec3::new(f64::NAN, 1.0, 0.0), None, &atomic),
        Err(LandmarkError::NonFinitePoint { index: 0 })
    );
    group
        .insert_new(DVec3::new(f64::MAX, 1.0, 0.0), None, &atomic)
        .expect("endlich");
    assert!(
        group
            .move_selected(DVec3::new(f64::MAX, 0.0, 0.0), &atomic)
            .is_err()
    );
    group
        .insert_new(DVec3::new(5.0, 5.0, 0.0), None, &atomic)
        .expect("endlich");

    group.save(&mut backend, &atomic).expect("Speichern erfolgreich");
    let states = group.tracker().state_count();
    group.save(&mut backend, &atomic).expect("Speichern erfolgreich");
    assert_eq!(group.tracker().state_count(), states, "Gleicher Stand wird nicht erneut abgelegt");

    let written = write_ljson(&group.to_ljson()).expect("Schreiben erfolgreich");
    assert!(!written.contains("null"), "Keine Platzhalter für gesetzte Punkte");
    let reparsed = parse_ljson(&written).expect("Geschriebenes LJSON gültig");
    let reloaded = LandmarkGroup::new("img", "pair", &reparsed).expect("Snapshot ladbar");
    assert_eq!(reloaded.to_ljson(), group.to_ljson());
    assert_eq!(reloaded.next_available(), None);
}
