mod common;

use akta_session_core::{MicroAlgos, PortError, SessionPhase};

use common::{addr, harness};

#[test]
fn failed_fetch_leaves_account_and_balance_untouched() {
    let mut h = harness();
    h.wallet.set_accounts(vec![addr('A')]);
    h.chain.set_balance(addr('A'), MicroAlgos(7_000_000));

    let fetch = h.controller.connect().expect("connect").expect("fetch");
    h.controller.refresh_balance(&fetch);
    assert_eq!(h.controller.session().balance, Some(MicroAlgos(7_000_000)));

    h.chain.fail_next_lookup("node flaked");
    h.controller.refresh_balance(&fetch);

    // Non-fatal: prior balance kept, connection state unchanged.
    assert_eq!(h.controller.session().account, Some(addr('A')));
    assert_eq!(h.controller.session().balance, Some(MicroAlgos(7_000_000)));
    assert_eq!(h.controller.phase(), SessionPhase::ConnectedWithBalance);

    let diags = h.controller.take_diagnostics();
    assert_eq!(diags.len(), 1);
    assert!(diags[0].detail.contains("node flaked"));
}

#[test]
fn stale_fetch_for_a_superseded_address_is_discarded() {
    let mut h = harness();
    h.wallet.queue_connect_result(Ok(vec![addr('A')]));
    h.wallet.queue_connect_result(Ok(vec![addr('B')]));
    h.chain.set_balance(addr('B'), MicroAlgos(9_000_000));

    let fetch_a = h.controller.connect().expect("connect A").expect("fetch A");
    let fetch_b = h.controller.connect().expect("connect B").expect("fetch B");

    // The fetch for A resolves after B became active: discarded.
    h.controller.apply_balance(&fetch_a.address, Ok(MicroAlgos(1)));
    assert_eq!(h.controller.session().account, Some(addr('B')));
    assert_eq!(h.controller.session().balance, None);

    h.controller.refresh_balance(&fetch_b);
    assert_eq!(h.controller.session().balance, Some(MicroAlgos(9_000_000)));
}

#[test]
fn balance_resets_when_the_active_address_changes() {
    let mut h = harness();
    h.wallet.queue_connect_result(Ok(vec![addr('A')]));
    h.wallet.queue_connect_result(Ok(vec![addr('B')]));
    h.chain.set_balance(addr('A'), MicroAlgos(5_000_000));

    let fetch_a = h.controller.connect().expect("connect A").expect("fetch A");
    h.controller.refresh_balance(&fetch_a);
    assert_eq!(h.controller.session().balance, Some(MicroAlgos(5_000_000)));

    h.controller.connect().expect("connect B");
    // A's cached balance must not be displayed against B.
    assert_eq!(h.controller.session().account, Some(addr('B')));
    assert_eq!(h.controller.session().balance, None);
    assert_eq!(h.controller.phase(), SessionPhase::Connected);
}

#[test]
fn fetch_result_applied_after_disconnect_is_discarded() {
    let mut h = harness();
    h.wallet.set_accounts(vec![addr('A')]);

    let fetch = h.controller.connect().expect("connect").expect("fetch");
    h.controller.disconnect();

    h.controller
        .apply_balance(&fetch.address, Ok(MicroAlgos(3_000_000)));
    assert_eq!(h.controller.phase(), SessionPhase::Disconnected);
    assert!(h.controller.session().balance.is_none());
}

#[test]
fn query_balance_reports_unknown_accounts() {
    let h = harness();
    let err = h
        .controller
        .query_balance(&addr('Z'))
        .expect_err("no balance seeded");
    assert!(matches!(err, PortError::NotFound(_)));
}
