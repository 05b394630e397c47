/// Integration tests for the connection lifecycle: idempotent connect,
/// fatal version mismatch, recoverable attach failures, repeatable
/// disconnect.

use broodlink_client::ConnectError;
use broodlink_test::EngineHarness;

#[test]
fn connect_is_idempotent_without_reattaching() {
    let mut harness = EngineHarness::new();
    assert!(harness.connect());
    assert!(harness.client.is_connected());

    // A second connect on a live session is a no-op.
    assert!(harness.client.connect());
    assert_eq!(
        harness.attach_count(),
        1,
        "connect on a live session must not reattach"
    );
}

#[test]
fn version_mismatch_fails_connect_and_is_fatal_on_reconnect() {
    let mut harness = EngineHarness::new();
    harness.set_version(9999);

    assert!(!harness.connect());
    assert!(!harness.client.is_connected());
    assert!(matches!(
        harness.client.connection().last_error(),
        Some(ConnectError::VersionMismatch { .. })
    ));

    // The retry loop must not spin forever on an error that can never
    // clear itself.
    let result = harness.client.reconnect();
    assert!(matches!(
        result,
        Err(ConnectError::VersionMismatch { engine: 9999, .. })
    ));
}

#[test]
fn reconnect_retries_past_recoverable_attach_failures() {
    let mut harness = EngineHarness::with_failing_attaches(2);
    harness.signals.push_ready();

    assert!(harness.client.reconnect().is_ok());
    assert!(harness.client.is_connected());
    assert_eq!(harness.attach_count(), 3);
}

#[test]
fn disconnect_is_repeatable_and_safe_when_never_connected() {
    let mut harness = EngineHarness::new();
    harness.client.disconnect();
    assert!(!harness.client.is_connected());

    assert!(harness.connect());
    harness.client.disconnect();
    assert!(!harness.client.is_connected());
    harness.client.disconnect();
    assert!(!harness.client.is_connected());
}

#[test]
fn handshake_failure_is_a_failed_attempt_not_a_crash() {
    let mut harness = EngineHarness::new();

    // No ready sentinel queued: the post-attach handshake read fails.
    assert!(!harness.client.connect());
    assert!(!harness.client.is_connected());

    // The next attempt, with the sentinel available, succeeds.
    assert!(harness.connect());
    assert_eq!(harness.attach_count(), 2);
}
