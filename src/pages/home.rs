//! Role-separated landing pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Landing page for ADMIN and EMPLOYEE users.
#[component]
pub fn AdminHomePage() -> impl IntoView {
    view! { <HomeShell title="Admin Dashboard"/> }
}

/// Landing page for regular users.
#[component]
pub fn UserHomePage() -> impl IntoView {
    view! { <HomeShell title="Home"/> }
}

/// Shared landing layout — greets the current user and links to the
/// account settings page. Redirects to `/login` once the session
/// resolves with no user.
#[component]
fn HomeShell(title: &'static str) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let greeting = move || {
        session
            .get()
            .user
            .map(|u| format!("Signed in as {}", u.username))
            .unwrap_or_default()
    };

    view! {
        <div class="home-page">
            <h1>{title}</h1>
            <p class="home-page__greeting">{greeting}</p>
            <a href="/account-settings" class="btn">
                "Account settings"
            </a>
        </div>
    }
}
