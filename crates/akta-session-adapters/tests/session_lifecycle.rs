mod common;

use akta_session_core::{MicroAlgos, PortError, SessionPhase};

use common::{addr, harness};

#[test]
fn restore_with_no_prior_session_stays_disconnected() {
    let mut h = harness();
    let fetch = h.controller.restore_session();
    assert!(fetch.is_none());
    assert_eq!(h.controller.phase(), SessionPhase::Disconnected);
    assert!(h.controller.session().account.is_none());
    assert!(h.controller.session().balance.is_none());
    assert!(h.controller.take_diagnostics().is_empty());
}

#[test]
fn restore_resumes_first_account_and_issues_one_fetch() {
    let mut h = harness();
    h.wallet.seed_stored_session(vec![addr('A'), addr('B')]);
    h.chain.set_balance(addr('A'), MicroAlgos(4_200_000));

    let fetch = h.controller.restore_session().expect("session resumed");
    assert_eq!(fetch.address, addr('A'));
    assert_eq!(h.controller.session().account, Some(addr('A')));
    assert_eq!(h.controller.phase(), SessionPhase::Connected);
    assert!(h.wallet.is_subscribed());

    h.controller.refresh_balance(&fetch);
    assert_eq!(h.chain.lookup_count(), 1);
    assert_eq!(h.controller.session().balance, Some(MicroAlgos(4_200_000)));
    assert_eq!(h.controller.phase(), SessionPhase::ConnectedWithBalance);
}

#[test]
fn restore_failure_is_swallowed_and_recorded() {
    let mut h = harness();
    h.wallet.fail_next_reconnect("bridge unreachable");

    let fetch = h.controller.restore_session();
    assert!(fetch.is_none());
    assert_eq!(h.controller.phase(), SessionPhase::Disconnected);

    let diags = h.controller.take_diagnostics();
    assert_eq!(diags.len(), 1);
    assert!(diags[0].detail.contains("bridge unreachable"));
}

#[test]
fn last_resolved_connect_wins() {
    let mut h = harness();
    h.wallet.queue_connect_result(Ok(vec![addr('A')]));
    h.wallet.queue_connect_result(Ok(vec![addr('B')]));

    let first = h.controller.connect().expect("first connect");
    assert_eq!(first.expect("fetch issued").address, addr('A'));
    let second = h.controller.connect().expect("second connect");
    assert_eq!(second.expect("fetch issued").address, addr('B'));

    assert_eq!(h.controller.session().account, Some(addr('B')));
}

#[test]
fn cancelled_connect_is_suppressed() {
    let mut h = harness();
    h.wallet.queue_connect_result(Err(PortError::Cancelled));

    let outcome = h.controller.connect().expect("cancellation is not an error");
    assert!(outcome.is_none());
    assert_eq!(h.controller.phase(), SessionPhase::Disconnected);
    assert!(h.controller.take_diagnostics().is_empty());
}

#[test]
fn failed_connect_is_recorded_and_surfaced() {
    let mut h = harness();
    h.wallet
        .queue_connect_result(Err(PortError::Transport("relay timeout".to_owned())));

    let err = h.controller.connect().expect_err("transport failure surfaces");
    assert!(err.to_string().contains("relay timeout"));
    assert_eq!(h.controller.phase(), SessionPhase::Disconnected);

    let diags = h.controller.take_diagnostics();
    assert_eq!(diags.len(), 1);
    assert!(diags[0].detail.contains("relay timeout"));
}

#[test]
fn connect_with_empty_account_list_stays_disconnected() {
    let mut h = harness();
    h.wallet.queue_connect_result(Ok(vec![]));

    assert!(h.controller.connect().is_err());
    assert_eq!(h.controller.phase(), SessionPhase::Disconnected);
}

#[test]
fn disconnect_when_disconnected_is_a_no_op() {
    let mut h = harness();
    h.controller.disconnect();
    assert_eq!(h.wallet.disconnect_calls(), 0);
    assert_eq!(h.controller.phase(), SessionPhase::Disconnected);
    assert!(h.controller.take_diagnostics().is_empty());
}

#[test]
fn local_disconnect_clears_state_and_notifies_connector() {
    let mut h = harness();
    h.wallet.set_accounts(vec![addr('A')]);
    h.chain.set_balance(addr('A'), MicroAlgos(1_000_000));

    let fetch = h.controller.connect().expect("connect").expect("fetch");
    h.controller.refresh_balance(&fetch);
    assert_eq!(h.controller.phase(), SessionPhase::ConnectedWithBalance);

    h.controller.disconnect();
    assert_eq!(h.wallet.disconnect_calls(), 1);
    assert_eq!(h.controller.session().account, None);
    assert_eq!(h.controller.session().balance, None);
}

#[test]
fn remote_disconnect_converges_without_calling_connector() {
    let mut h = harness();
    h.wallet.set_accounts(vec![addr('A')]);
    h.controller.connect().expect("connect");
    assert_eq!(h.controller.phase(), SessionPhase::Connected);

    h.wallet.push_disconnect();
    h.controller.pump_wallet_events();

    assert_eq!(h.controller.session().account, None);
    assert_eq!(h.controller.session().balance, None);
    // Remote revocation never re-invokes the connector's disconnect.
    assert_eq!(h.wallet.disconnect_calls(), 0);
}

#[test]
fn events_are_ignored_before_any_subscription() {
    let mut h = harness();
    h.wallet.push_disconnect();
    h.controller.pump_wallet_events();
    assert!(h.controller.take_diagnostics().is_empty());

    // A fresh connect re-subscribes and the old event was never delivered
    // against the new session.
    h.wallet.set_accounts(vec![addr('C')]);
    h.controller.connect().expect("connect");
    assert_eq!(h.controller.session().account, Some(addr('C')));
}
