/// Integration tests for the per-frame signal exchange: one done byte out
/// per ready byte in, unknown bytes skipped, and a torn channel forcing a
/// disconnect.

use broodlink_client::SyncError;
use broodlink_shared::{GameEvent, SIGNAL_CLIENT_DONE};
use broodlink_test::{CollectingListener, EngineHarness};

#[test]
fn each_update_writes_one_done_and_consumes_one_ready() {
    let mut harness = EngineHarness::new();
    assert!(harness.connect());

    let mut listener = CollectingListener::default();
    harness.present_frame(1, vec![GameEvent::MatchFrame]);
    harness.client.update(&mut listener).unwrap();

    assert_eq!(harness.signals.sent_by_client(), vec![SIGNAL_CLIENT_DONE]);
    assert_eq!(harness.client.world().frame(), 1);

    harness.present_frame(2, vec![GameEvent::MatchFrame]);
    harness.client.update(&mut listener).unwrap();

    assert_eq!(
        harness.signals.sent_by_client(),
        vec![SIGNAL_CLIENT_DONE, SIGNAL_CLIENT_DONE]
    );
    assert_eq!(harness.client.world().frame(), 2);
}

#[test]
fn unknown_signal_bytes_are_skipped_while_waiting_for_ready() {
    let mut harness = EngineHarness::new();
    assert!(harness.connect());

    harness.state.lock().unwrap().frame = 1;
    harness.signals.push_byte(9);
    harness.signals.push_byte(0);
    harness.signals.push_ready();

    let mut listener = CollectingListener::default();
    harness.client.update(&mut listener).unwrap();
    assert_eq!(harness.client.world().frame(), 1);
}

#[test]
fn a_torn_channel_fails_the_exchange_and_disconnects() {
    let mut harness = EngineHarness::new();
    assert!(harness.connect());

    // No ready sentinel: the blocking read reports the engine gone.
    let mut listener = CollectingListener::default();
    let result = harness.client.update(&mut listener);
    assert!(matches!(result, Err(SyncError::Signal(_))));
    assert!(!harness.client.is_connected());

    // Until a reconnect, further updates fail fast.
    let result = harness.client.update(&mut listener);
    assert!(matches!(result, Err(SyncError::NotConnected)));
}
