//! Top navigation bar with session indicator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the shared session store so every route shows the same identity.
//! It never writes the store.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::state::session::{CheckStatus, SessionConfig, SessionStore};

pub const NAV_LINKS: [(&str, &str); 3] =
    [("/dashboard", "Dashboard"), ("/annotator", "Annotator"), ("/about", "About")];

/// Label for the identity slot of the navbar.
pub(crate) fn session_label(config: &SessionConfig, check: &CheckStatus) -> String {
    match (config.username(), config.logged, check) {
        (Some(name), true, _) => name.to_owned(),
        (_, _, CheckStatus::InFlight) => "Checking session…".to_owned(),
        _ => "Not logged in".to_owned(),
    }
}

/// Hover text for the identity slot: email and role when the backend sent them.
pub(crate) fn session_tooltip(config: &SessionConfig) -> Option<String> {
    let user = config.user.as_ref().filter(|_| config.logged)?;
    match (user.email(), user.role()) {
        (Some(email), Some(role)) => Some(format!("{email} ({role})")),
        (Some(email), None) => Some(email.to_owned()),
        (None, Some(role)) => Some(role.to_owned()),
        (None, None) => None,
    }
}

pub(crate) fn badge_class(config: &SessionConfig) -> &'static str {
    match config.user.as_ref() {
        Some(user) if config.logged && user.is_admin() => "navbar__user navbar__user--logged navbar__user--admin",
        Some(_) if config.logged => "navbar__user navbar__user--logged",
        _ => "navbar__user",
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let label = move || session_label(&session.config(), &session.check_status());
    let class = move || badge_class(&session.config());
    let title = move || session_tooltip(&session.config());

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"Genocrowd"</a>
            <ul class="navbar__links">
                {NAV_LINKS
                    .iter()
                    .map(|(href, text)| view! { <li><a href=*href>{*text}</a></li> })
                    .collect::<Vec<_>>()}
            </ul>
            <span class=class title=title>{label}</span>
        </nav>
    }
}
