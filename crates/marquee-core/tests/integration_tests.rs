//! Integration tests for Marquee Core

use marquee_core::{
    BufferedRanges, LabelOverrides, Labels, MediaEventKind, MediaSnapshot, NetworkState,
    PlaybackPhase, PlayerConfig, PlayerState, ReadyState, Theme, ThrottleDecision, ThrottleGate,
};

fn healthy_snapshot() -> MediaSnapshot {
    MediaSnapshot {
        duration: 100.0,
        current_time: 25.0,
        buffered: vec![(0.0, 80.0)].into(),
        paused: true,
        ready_state: ReadyState::HaveEnoughData,
        network_state: NetworkState::Idle,
        ..Default::default()
    }
}

// =============================================================================
// State Derivation Tests
// =============================================================================

#[test]
fn test_playing_scenario_derives_percentages() {
    // duration=100, currentTime=25, no error: played is 25%, the overlay
    // shows the play affordance rather than error or loading
    let mut state = PlayerState::default();
    state.apply_snapshot(&healthy_snapshot());

    assert_eq!(state.percentage_played, 25.0);
    assert!(!state.error);
    assert!(!state.loading);
    assert_eq!(state.phase(), PlaybackPhase::Paused);
}

#[test]
fn test_no_source_scenario_is_sticky_error() {
    let mut state = PlayerState::default();
    state.apply_snapshot(&MediaSnapshot {
        network_state: NetworkState::NoSource,
        ready_state: ReadyState::HaveNothing,
        paused: false,
        ..healthy_snapshot()
    });

    // Error wins regardless of loading/paused state
    assert!(state.error);
    assert_eq!(state.phase(), PlaybackPhase::Error);

    // Error clears only once the network state changes (new source load)
    state.apply_snapshot(&healthy_snapshot());
    assert!(!state.error);
}

#[test]
fn test_buffering_scenario_shows_loading() {
    let mut state = PlayerState::default();
    state.apply_snapshot(&MediaSnapshot {
        ready_state: ReadyState::HaveFutureData,
        ..healthy_snapshot()
    });

    assert!(state.loading);
    assert!(!state.error);
    assert_eq!(state.phase(), PlaybackPhase::Loading);
}

#[test]
fn test_buffered_percentage_uses_last_range_end() {
    let mut state = PlayerState::default();
    state.apply_snapshot(&MediaSnapshot {
        duration: 200.0,
        buffered: vec![(0.0, 30.0), (90.0, 150.0)].into(),
        ..healthy_snapshot()
    });
    assert_eq!(state.percentage_buffered, 75.0);

    state.apply_snapshot(&MediaSnapshot {
        duration: 200.0,
        buffered: BufferedRanges::new(),
        ..healthy_snapshot()
    });
    assert_eq!(state.percentage_buffered, 0.0);
}

#[test]
fn test_derivation_is_idempotent_across_full_pipeline() {
    let snap = healthy_snapshot();
    let mut state = PlayerState::initial(true, false);
    state.apply_snapshot(&snap);
    let first = state.clone();
    state.apply_snapshot(&snap);
    assert_eq!(state, first);
}

// =============================================================================
// Throttle Law Tests
// =============================================================================

#[test]
fn test_throttle_law_one_run_per_window() {
    let mut gate = ThrottleGate::default();

    // A burst of N triggers inside one 100ms window: exactly one immediate
    // run, one scheduled trailing run, everything else coalesced
    let mut runs = 0;
    let mut scheduled = 0;
    for i in 0..10 {
        match gate.request(i as f64 * 9.0) {
            ThrottleDecision::Run => runs += 1,
            ThrottleDecision::Schedule(_) => scheduled += 1,
            ThrottleDecision::Coalesced => {}
        }
    }
    assert_eq!(runs, 1);
    assert_eq!(scheduled, 1);
}

#[test]
fn test_forced_update_bypasses_throttle_window() {
    let mut gate = ThrottleGate::default();
    assert_eq!(gate.request(0.0), ThrottleDecision::Run);
    assert_eq!(gate.request(20.0), ThrottleDecision::Schedule(80.0));

    // A forced seek re-derives state synchronously no matter the window;
    // the pending trailing run is dropped along with it
    gate.force(30.0);
    assert!(!gate.is_pending());

    let mut state = PlayerState::default();
    state.apply_snapshot(&MediaSnapshot {
        current_time: 100.0,
        duration: 200.0,
        ..healthy_snapshot()
    });
    assert_eq!(state.current_time, 100.0);
    assert_eq!(state.percentage_played, 50.0);
}

#[test]
fn test_cancelled_gate_runs_nothing_after_teardown() {
    let mut gate = ThrottleGate::default();
    gate.request(0.0);
    gate.request(10.0);
    assert!(gate.is_pending());

    // Unmount while a resynchronization is pending
    gate.cancel();
    assert!(!gate.is_pending());
}

// =============================================================================
// Label Tests
// =============================================================================

#[test]
fn test_label_defaults_cover_minimum_key_set() {
    let labels = Labels::default();
    assert!(!labels.fullscreen.is_empty());
    assert!(!labels.seek.is_empty());
    assert!(!labels.source_error.is_empty());
}

#[test]
fn test_label_overrides_resolve_at_construction() {
    let labels = Labels::resolve(&LabelOverrides {
        source_error: Some("No dice.".into()),
        ..Default::default()
    });
    assert_eq!(labels.source_error, "No dice.");
    assert_eq!(labels.play, Labels::default().play);
}

// =============================================================================
// Config / Media Table Tests
// =============================================================================

#[test]
fn test_event_table_has_the_full_media_event_set() {
    assert_eq!(MediaEventKind::ALL.len(), 23);
    assert!(MediaEventKind::ALL.contains(&MediaEventKind::TimeUpdate));
    assert_eq!(MediaEventKind::Error.as_name(), "error");
}

#[test]
fn test_config_round_trips_through_json() {
    let config = PlayerConfig {
        autoplay: true,
        sources: vec![marquee_core::Source::with_type("a.mp4", "video/mp4")],
        ..Default::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: PlayerConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_theme_stylesheet_is_injectable() {
    let css = Theme::default().to_css();
    assert!(css.contains(":root"));
    assert!(css.contains(".video"));
}
