/// Integration tests for event dispatch: engine order preserved, the
/// terminal flag computed before any handler runs, and timing suppressed
/// once the match has ended.

use std::panic::{catch_unwind, AssertUnwindSafe};

use broodlink_shared::GameEvent;
use broodlink_test::{CollectingListener, EngineHarness};

#[test]
fn batch_dispatches_in_engine_order() {
    let mut harness = EngineHarness::new();
    assert!(harness.connect());

    let mut listener = CollectingListener::default();
    harness.present_frame(
        1,
        vec![
            GameEvent::MatchStart,
            GameEvent::UnitCreate { unit: 5 },
            GameEvent::MatchFrame,
            GameEvent::ReceiveText {
                player: 1,
                text: "gg".into(),
            },
        ],
    );
    harness.client.update(&mut listener).unwrap();

    assert_eq!(listener.log, vec!["start", "create:5", "frame", "chat:1:gg"]);
}

#[test]
fn handlers_after_match_end_still_fire_in_the_same_batch() {
    let mut harness = EngineHarness::new();
    assert!(harness.connect());

    let mut listener = CollectingListener::default();
    harness.present_frame(
        1,
        vec![
            GameEvent::MatchFrame,
            GameEvent::MatchEnd { winner: true },
            GameEvent::UnitDestroy { unit: 7 },
            GameEvent::MatchFrame,
        ],
    );
    harness.client.update(&mut listener).unwrap();

    assert_eq!(listener.log, vec!["frame", "end:true", "destroy:7", "frame"]);
    assert!(harness.client.is_terminal());
    assert_eq!(harness.client.winner(), Some(true));
}

#[test]
fn terminal_state_survives_a_panicking_handler() {
    let mut harness = EngineHarness::new();
    assert!(harness.connect());

    let mut listener = CollectingListener {
        panic_on_end: true,
        ..CollectingListener::default()
    };
    harness.present_frame(1, vec![GameEvent::MatchEnd { winner: false }]);

    let result = catch_unwind(AssertUnwindSafe(|| {
        let _ = harness.client.update(&mut listener);
    }));
    assert!(result.is_err(), "the listener panic must propagate");

    // The terminal scan ran before the handler, so the outcome is kept.
    assert!(harness.client.is_terminal());
    assert_eq!(harness.client.winner(), Some(false));
}

#[test]
fn frame_timing_is_skipped_once_terminal() {
    let mut harness = EngineHarness::new();
    assert!(harness.connect());

    let mut listener = CollectingListener::default();
    harness.present_frame(1, vec![GameEvent::MatchFrame]);
    harness.client.update(&mut listener).unwrap();
    let timed = harness.client.last_frame_response();
    assert!(timed.is_some());

    harness.present_frame(
        2,
        vec![GameEvent::MatchEnd { winner: false }, GameEvent::MatchFrame],
    );
    harness.client.update(&mut listener).unwrap();

    // The per-frame handler still fired, but was not timed.
    assert_eq!(listener.log.iter().filter(|tag| *tag == "frame").count(), 2);
    assert_eq!(harness.client.last_frame_response(), timed);
}

#[test]
fn match_start_resets_terminal_state() {
    let mut harness = EngineHarness::new();
    assert!(harness.connect());

    let mut listener = CollectingListener::default();
    harness.present_frame(1, vec![GameEvent::MatchEnd { winner: true }]);
    harness.client.update(&mut listener).unwrap();
    assert!(harness.client.is_terminal());

    harness.present_frame(2, vec![GameEvent::MatchStart, GameEvent::MatchFrame]);
    harness.client.update(&mut listener).unwrap();
    assert!(!harness.client.is_terminal());
    assert_eq!(harness.client.winner(), None);
}
