use akta_session_adapters::Web3AuthAdapter;
use akta_session_core::{IdentityPort, IdentityProviderKind, PortError, UserProfile};

#[test]
fn connect_before_init_is_rejected() {
    let adapter = Web3AuthAdapter::in_memory();
    let err = adapter
        .connect_to(IdentityProviderKind::Google)
        .expect_err("init gate");
    assert!(matches!(err, PortError::Validation(_)));
}

#[test]
fn init_connect_user_info_logout_roundtrip() {
    let adapter = Web3AuthAdapter::in_memory();
    adapter.set_profile(UserProfile {
        name: "Grace Hopper".to_owned(),
        email: "grace@akta.example".to_owned(),
        profile_image: Some("https://akta.example/grace.png".to_owned()),
    });

    adapter.init().expect("init");
    adapter
        .connect_to(IdentityProviderKind::Email)
        .expect("connect");

    let profile = adapter.user_info().expect("profile available");
    assert_eq!(profile.name, "Grace Hopper");
    assert_eq!(profile.email, "grace@akta.example");

    adapter.logout().expect("logout");
    assert!(matches!(
        adapter.user_info().expect_err("session gone"),
        PortError::NotFound(_)
    ));
    // Logging out twice is harmless.
    adapter.logout().expect("repeat logout");
}
