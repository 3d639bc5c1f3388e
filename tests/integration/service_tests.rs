//! IndicatorService → IndicatorPort, one tick at a time.

use ledbridge::app::events::AppEvent;
use ledbridge::app::service::IndicatorService;
use ledbridge::app::status::Status;
use ledbridge::app::store::StatusStore;
use ledbridge::error::Error;

use crate::mock_hw::{CollectingSink, RecordingIndicator};

const OFF: (bool, bool, bool) = (false, false, false);

fn service() -> (
    IndicatorService<RecordingIndicator, CollectingSink>,
    RecordingIndicator,
    CollectingSink,
) {
    let hw = RecordingIndicator::new();
    let sink = CollectingSink::new();
    (IndicatorService::new(hw.clone(), sink.clone()), hw, sink)
}

#[test]
fn default_status_renders_green() {
    let (mut svc, hw, sink) = service();
    let store = StatusStore::default();
    svc.render_tick(&store).unwrap();
    assert_eq!(hw.tuples(), vec![(true, false, false)]);
    assert_eq!(sink.transitions(), vec!["available"]);
}

#[test]
fn every_known_solid_status_matches_table() {
    let table = [
        (Status::Available, (true, false, false)),
        (Status::AvailableOverride, (true, false, false)),
        (Status::CheckedOut, OFF),
        (Status::Off, OFF),
        (Status::ChargingOverride, (false, true, false)),
        (Status::FaultyOverride, (false, false, true)),
    ];
    let (mut svc, _hw, _sink) = service();
    let store = StatusStore::default();
    for (status, expected) in table {
        store.set(status.clone());
        assert_eq!(svc.render_tick(&store).unwrap().as_tuple(), expected, "{status}");
        assert_eq!(svc.render_tick(&store).unwrap().as_tuple(), expected, "{status}");
    }
}

#[test]
fn charging_blink_scenario() {
    let (mut svc, hw, _sink) = service();
    let store = StatusStore::default();
    store.set(Status::parse("charging-blink"));
    svc.render_tick(&store).unwrap();
    svc.render_tick(&store).unwrap();
    assert_eq!(hw.tuples(), vec![(false, true, false), OFF]);
}

#[test]
fn faulty_blink_both_phases() {
    let (mut svc, hw, _sink) = service();
    let store = StatusStore::new(Status::FaultyBlink);
    for _ in 0..4 {
        svc.render_tick(&store).unwrap();
    }
    assert_eq!(
        hw.tuples(),
        vec![(false, false, true), OFF, (false, false, true), OFF]
    );
}

#[test]
fn setting_same_status_twice_is_idempotent() {
    let once = {
        let (mut svc, hw, _) = service();
        let store = StatusStore::default();
        store.set(Status::ChargingOverride);
        svc.render_tick(&store).unwrap();
        hw.tuples()
    };
    let twice = {
        let (mut svc, hw, _) = service();
        let store = StatusStore::default();
        store.set(Status::ChargingOverride);
        store.set(Status::ChargingOverride);
        svc.render_tick(&store).unwrap();
        hw.tuples()
    };
    assert_eq!(once, twice);
}

#[test]
fn last_write_before_tick_wins() {
    let (mut svc, hw, sink) = service();
    let store = StatusStore::default();
    svc.render_tick(&store).unwrap();
    store.set(Status::FaultyOverride);
    store.set(Status::CheckedOut);
    svc.render_tick(&store).unwrap();
    assert_eq!(hw.last(), Some(OFF));
    assert_eq!(sink.transitions(), vec!["available", "checked-out"]);
}

#[test]
fn unknown_status_renders_dark() {
    let (mut svc, hw, sink) = service();
    let store = StatusStore::new(Status::parse("out-to-lunch"));
    svc.render_tick(&store).unwrap();
    assert_eq!(hw.tuples(), vec![OFF]);
    assert_eq!(sink.transitions(), vec!["out-to-lunch"]);
}

#[test]
fn status_changed_only_on_change() {
    let (mut svc, _hw, sink) = service();
    let store = StatusStore::default();
    for _ in 0..3 {
        svc.render_tick(&store).unwrap();
    }
    store.set(Status::Off);
    svc.render_tick(&store).unwrap();
    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert!(matches!(
        &events[1],
        AppEvent::StatusChanged { from: Some(Status::Available), to: Status::Off, .. }
    ));
}

#[test]
fn shutdown_forces_safe_state() {
    let (mut svc, hw, sink) = service();
    let store = StatusStore::new(Status::FaultyOverride);
    svc.render_tick(&store).unwrap();
    assert_eq!(hw.last(), Some((false, false, true)));
    svc.shutdown().unwrap();
    assert_eq!(hw.last(), Some(OFF));
    assert_eq!(sink.events().last(), Some(&AppEvent::SafeState));
}

#[test]
fn write_failure_is_returned() {
    let hw = RecordingIndicator::failing_at(0);
    let mut svc = IndicatorService::new(hw.clone(), CollectingSink::new());
    let err = svc.render_tick(&StatusStore::default()).unwrap_err();
    assert!(matches!(err, Error::Gpio(_)));
    assert!(hw.history().is_empty());
}
