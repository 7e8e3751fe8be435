// Host-side tests for the experience state machine.

use nav_core::constants::WARP_TRAVEL_MS;
use nav_core::{Catalog, Cue, Session, TravelStatus, DESTINATIONS};
use std::time::Duration;

fn dest(i: usize) -> &'static nav_core::Destination {
    &DESTINATIONS[i]
}

#[test]
fn selection_dispatches_by_catalog_id() {
    // Card clicks resolve their destination through the id index.
    let catalog = Catalog::new();
    let mut session = Session::new();
    let europa = catalog.get("europa").expect("known id");
    let cues = session.select(europa);
    assert_eq!(cues.as_slice(), &[Cue::Click]);
    assert_eq!(session.selected().map(|d| d.id), Some("europa"));
    // Re-resolving the same id yields the same entry, so no re-click.
    let again = catalog.get("europa").expect("known id");
    assert!(session.select(again).is_empty());
}

#[test]
fn selecting_same_destination_twice_clicks_once() {
    let mut session = Session::new();
    let cues = session.select(dest(0));
    assert_eq!(cues.as_slice(), &[Cue::Click]);
    let cues = session.select(dest(0));
    assert!(cues.is_empty(), "repeat selection must not re-click");
    let cues = session.select(dest(1));
    assert_eq!(cues.as_slice(), &[Cue::Click]);
}

#[test]
fn confirm_without_selection_is_a_no_op() {
    let mut session = Session::new();
    assert!(session.confirm_warp().is_none());
    assert_eq!(session.status(), TravelStatus::Idle);
    // No countdown was armed: time passing never produces an arrival.
    for _ in 0..100 {
        assert!(session.advance(Duration::from_millis(500)).is_none());
    }
}

#[test]
fn warp_arrives_after_exactly_the_configured_delay() {
    let mut session = Session::new();
    session.select(dest(2));
    let cues = session.confirm_warp().expect("confirm with lock-on");
    assert_eq!(cues.as_slice(), &[Cue::Click, Cue::WarpEngage]);
    assert_eq!(session.status(), TravelStatus::Warping);

    // One millisecond short of the travel time: still warping.
    assert!(session
        .advance(Duration::from_millis(WARP_TRAVEL_MS - 1))
        .is_none());
    assert_eq!(session.status(), TravelStatus::Warping);

    let arrival = session
        .advance(Duration::from_millis(1))
        .expect("arrival on the boundary");
    assert_eq!(arrival.destination.id, dest(2).id);
    assert_eq!(arrival.cues.as_slice(), &[Cue::Arrival]);
    assert_eq!(session.status(), TravelStatus::Arrived);
    assert!(session.log_pending());

    // Arrival fires exactly once.
    assert!(session.advance(Duration::from_millis(1000)).is_none());
}

#[test]
fn selection_is_frozen_while_warping_and_arrived() {
    let mut session = Session::new();
    session.select(dest(0));
    session.confirm_warp().unwrap();
    assert!(session.select(dest(1)).is_empty());
    assert_eq!(session.selected().unwrap().id, dest(0).id);
    session.advance(Duration::from_millis(WARP_TRAVEL_MS)).unwrap();
    assert!(session.select(dest(1)).is_empty());
    assert_eq!(session.selected().unwrap().id, dest(0).id);
}

#[test]
fn log_applies_only_for_the_issuing_session() {
    let mut session = Session::new();
    session.select(dest(0));
    session.confirm_warp().unwrap();
    let arrival = session
        .advance(Duration::from_millis(WARP_TRAVEL_MS))
        .unwrap();

    assert!(session.apply_log(arrival.fetch_token, "轨道稳定。".to_string()));
    assert_eq!(session.travel_log(), "轨道稳定。");
    assert!(!session.log_pending());
}

#[test]
fn stale_fetch_after_disconnect_is_discarded() {
    let mut session = Session::new();
    session.select(dest(0));
    session.confirm_warp().unwrap();
    let arrival = session
        .advance(Duration::from_millis(WARP_TRAVEL_MS))
        .unwrap();
    let token = arrival.fetch_token;

    // User leaves before the fetch resolves.
    let cues = session.disconnect();
    assert_eq!(cues.as_slice(), &[Cue::Click]);
    assert!(!session.apply_log(token, "迟到的日志".to_string()));
    assert_eq!(session.travel_log(), "");
}

#[test]
fn disconnect_resets_everything() {
    let mut session = Session::new();
    session.select(dest(3));
    session.confirm_warp().unwrap();
    let arrival = session
        .advance(Duration::from_millis(WARP_TRAVEL_MS))
        .unwrap();
    session.apply_log(arrival.fetch_token, "到达。".to_string());

    session.disconnect();
    assert_eq!(session.status(), TravelStatus::Idle);
    assert!(session.selected().is_none());
    assert_eq!(session.travel_log(), "");
    assert!(!session.log_pending());
}

#[test]
fn disconnect_outside_arrived_is_a_no_op() {
    let mut session = Session::new();
    assert!(session.disconnect().is_empty());
    session.select(dest(0));
    session.confirm_warp().unwrap();
    assert!(session.disconnect().is_empty());
    assert_eq!(session.status(), TravelStatus::Warping);
}

#[test]
fn re_warping_invalidates_prior_fetch_tokens() {
    let mut session = Session::new();
    session.select(dest(0));
    session.confirm_warp().unwrap();
    let first = session
        .advance(Duration::from_millis(WARP_TRAVEL_MS))
        .unwrap();
    session.disconnect();

    session.select(dest(1));
    session.confirm_warp().unwrap();
    let second = session
        .advance(Duration::from_millis(WARP_TRAVEL_MS))
        .unwrap();

    assert_ne!(first.fetch_token, second.fetch_token);
    assert!(!session.apply_log(first.fetch_token, "旧会话".to_string()));
    assert!(session.apply_log(second.fetch_token, "新会话".to_string()));
}
