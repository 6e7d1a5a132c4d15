use akta_session_core::{
    truncate_text, AccountAddress, MicroAlgos, SessionPhase, WalletSession, ELLIPSIS,
};

#[test]
fn truncate_leaves_short_text_unchanged() {
    assert_eq!(truncate_text("ABCDEF", 6), "ABCDEF");
    assert_eq!(truncate_text("ABCDEF", 12), "ABCDEF");
    assert_eq!(truncate_text("", 0), "");
}

#[test]
fn truncate_keeps_exactly_max_len_chars_plus_marker() {
    let out = truncate_text("ABCDEFGHIJKLMNOP", 12);
    assert_eq!(out, format!("ABCDEFGHIJKL{ELLIPSIS}"));
    let displayed: String = out.chars().take(out.chars().count() - ELLIPSIS.len()).collect();
    assert_eq!(displayed.chars().count(), 12);
}

#[test]
fn truncate_counts_chars_not_bytes() {
    let out = truncate_text("åäöåäö", 3);
    assert_eq!(out, format!("åäö{ELLIPSIS}"));
}

#[test]
fn address_parse_enforces_length_and_alphabet() {
    let valid = "A".repeat(58);
    assert!(AccountAddress::parse(&valid).is_ok());
    assert!(AccountAddress::parse("TOO_SHORT").is_err());
    let lowercase = "a".repeat(58);
    assert!(AccountAddress::parse(&lowercase).is_err());
    let bad_digit = format!("{}1", "A".repeat(57));
    assert!(AccountAddress::parse(&bad_digit).is_err());
}

#[test]
fn session_phase_follows_account_and_balance() {
    let mut session = WalletSession::default();
    assert_eq!(session.phase(), SessionPhase::Disconnected);

    session.account = Some(AccountAddress::parse(&"B".repeat(58)).expect("valid address"));
    assert_eq!(session.phase(), SessionPhase::Connected);

    session.balance = Some(MicroAlgos(2_500_000));
    assert_eq!(session.phase(), SessionPhase::ConnectedWithBalance);
    assert_eq!(session.display_balance(), Some(2.5));
}

#[test]
fn micro_unit_conversion_uses_fixed_divisor() {
    assert_eq!(MicroAlgos(0).to_algos(), 0.0);
    assert_eq!(MicroAlgos(1_000_000).to_algos(), 1.0);
    assert_eq!(MicroAlgos(1_337_500).to_algos(), 1.3375);
}
