use super::*;
use crate::net::types::UserIdentity;

#[test]
fn label_shows_username_when_logged() {
    let config = SessionConfig { user: Some(UserIdentity::new("alice")), logged: true };
    assert_eq!(session_label(&config, &CheckStatus::Idle), "alice");
}

#[test]
fn label_shows_checking_while_in_flight() {
    assert_eq!(session_label(&SessionConfig::default(), &CheckStatus::InFlight), "Checking session…");
}

#[test]
fn label_falls_back_to_not_logged_in() {
    assert_eq!(session_label(&SessionConfig::default(), &CheckStatus::Idle), "Not logged in");
    assert_eq!(
        session_label(&SessionConfig::default(), &CheckStatus::Failed("x".to_owned())),
        "Not logged in"
    );
}

#[test]
fn nav_links_cover_every_view() {
    let paths: Vec<_> = NAV_LINKS.iter().map(|(href, _)| *href).collect();
    assert_eq!(paths, ["/dashboard", "/annotator", "/about"]);
}

#[test]
fn tooltip_and_badge_reflect_profile_fields() {
    let user = UserIdentity::from_value(serde_json::json!({
        "username": "jdoe",
        "email": "jdoe@genocrowd.org",
        "role": "admin",
        "isAdmin": true
    }))
    .unwrap();
    let config = SessionConfig { user: Some(user), logged: true };

    assert_eq!(session_tooltip(&config).as_deref(), Some("jdoe@genocrowd.org (admin)"));
    assert!(badge_class(&config).ends_with("navbar__user--admin"));
}

#[test]
fn logged_out_user_gets_plain_badge_and_no_tooltip() {
    let config = SessionConfig { user: Some(UserIdentity::new("alice")), logged: false };
    assert_eq!(session_tooltip(&config), None);
    assert_eq!(badge_class(&config), "navbar__user");
    assert_eq!(badge_class(&SessionConfig { logged: true, ..config }), "navbar__user navbar__user--logged");
}
