// Host-side tests for the navigation menu state machine.

use doug_core::{NavState, NavTrigger};

const ALL: [NavTrigger; 4] = [
    NavTrigger::Toggle,
    NavTrigger::Overlay,
    NavTrigger::Link,
    NavTrigger::Escape,
];

#[test]
fn starts_closed() {
    assert_eq!(NavState::default(), NavState::Closed);
    assert!(!NavState::default().markers().scroll_locked);
}

#[test]
fn toggle_flips_both_ways() {
    let open = NavState::Closed.apply(NavTrigger::Toggle);
    assert_eq!(open, NavState::Open);
    assert_eq!(open.apply(NavTrigger::Toggle), NavState::Closed);
}

#[test]
fn closing_triggers_are_one_way() {
    for t in [NavTrigger::Overlay, NavTrigger::Link, NavTrigger::Escape] {
        assert_eq!(NavState::Open.apply(t), NavState::Closed, "{t:?}");
        assert_eq!(NavState::Closed.apply(t), NavState::Closed, "{t:?}");
    }
}

#[test]
fn escape_key_maps_to_trigger() {
    assert_eq!(NavTrigger::from_key("Escape"), Some(NavTrigger::Escape));
    assert_eq!(NavTrigger::from_key("Esc"), None);
    assert_eq!(NavTrigger::from_key("Enter"), None);
}

#[test]
fn markers_stay_consistent_after_any_sequence() {
    let mut state = NavState::Closed;
    // Deterministic walk over trigger sequences.
    for i in 0..256usize {
        state = state.apply(ALL[(i * 7 + i / 3) % ALL.len()]);
        let m = state.markers();
        assert!(m.consistent());
        assert_eq!(m.scroll_locked, m.panel_active);
        assert_eq!(m.panel_active, state.is_open());
    }
}

#[test]
fn body_overflow_follows_lock() {
    assert_eq!(NavState::Open.markers().body_overflow(), "hidden");
    assert_eq!(NavState::Closed.markers().body_overflow(), "");
}
