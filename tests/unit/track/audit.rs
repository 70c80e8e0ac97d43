use super::*;
use crate::track::{ComplexTrack, LinearTrack};

#[derive(Debug)]
struct Staircase;

impl TrackMapper for Staircase {
    fn cap_offset(&self) -> f64 {
        0.0
    }

    fn max_value(&self) -> f64 {
        10.0
    }

    // Deliberately broken: reads backwards above cursor 5 and never maps back exactly.
    fn track_value(&self, cursor: f64, _track_size: f64) -> f64 {
        if cursor > 5.0 { 10.0 - cursor } else { cursor }
    }

    fn track_cursor(&self, value: f64, _track_size: f64) -> f64 {
        value
    }
}

#[test]
fn shipped_mappers_sweep_clean() {
    let zoom = ComplexTrack::new(49.0, 30.0).unwrap();
    let time = LinearTrack::new(19.0, 60.0).unwrap();
    for w in [0.0, 1.0, 200.0, 408.0, 430.0, 1_024.5] {
        let report = audit(&zoom, w).unwrap();
        assert!(report.is_clean(), "{report:?}");
        let report = audit(&time, w).unwrap();
        assert!(report.is_clean(), "{report:?}");
    }
}

#[test]
fn sample_count_covers_every_integer_cursor() {
    let zoom = ComplexTrack::new(49.0, 30.0).unwrap();
    let report = audit(&zoom, 430.0).unwrap();
    assert_eq!(report.max_cursor, 381.0);
    assert_eq!(report.samples, 382);

    let empty = audit(&zoom, 10.0).unwrap();
    assert_eq!(empty.samples, 1);
    assert!(empty.is_clean());
}

#[test]
fn broken_mapper_is_reported() {
    let report = audit(&Staircase, 10.0).unwrap();
    assert!(!report.is_clean());
    assert_eq!(report.value_regressions, vec![6.0, 7.0, 8.0, 9.0, 10.0]);
    assert_eq!(report.round_trip_misses.len(), 5);
    assert_eq!(
        report.round_trip_misses[0],
        RoundTripMiss {
            cursor: 6.0,
            value: 4.0,
            returned: 4.0
        }
    );
}

#[test]
fn report_serializes_for_the_cli() {
    let zoom = ComplexTrack::new(49.0, 30.0).unwrap();
    let json = serde_json::to_value(audit(&zoom, 430.0).unwrap()).unwrap();
    assert_eq!(json["samples"], 382);
    assert!(json["round_trip_misses"].as_array().unwrap().is_empty());
}

#[test]
fn boxed_mapper_can_be_audited() {
    let mapper = crate::track::create_mapper(crate::track::TrackKind::Linear, 10.0, 100.0).unwrap();
    assert!(audit(mapper.as_ref(), 110.0).unwrap().is_clean());
}

#[test]
fn unbounded_tracks_are_rejected() {
    let time = LinearTrack::new(0.0, 10.0).unwrap();
    for w in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        let err = audit(&time, w).unwrap_err();
        assert!(matches!(err, SlideError::Validation(_)), "{err}");
    }

    let err = audit(&time, 1e12).unwrap_err();
    assert!(err.to_string().contains("sweep limit"));
}

#[test]
fn sweep_limit_is_inclusive() {
    let time = LinearTrack::new(0.0, 10.0).unwrap();
    // Cursors 0..=999_999 are exactly MAX_SWEEP_SAMPLES samples.
    let report = audit(&time, MAX_SWEEP_SAMPLES - 1.0).unwrap();
    assert_eq!(report.samples as f64, MAX_SWEEP_SAMPLES);
    assert!(audit(&time, MAX_SWEEP_SAMPLES).is_err());
}
