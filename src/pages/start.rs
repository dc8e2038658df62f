//! Start page — entry links for signed-out visitors.

use leptos::prelude::*;

/// Landing page at the root route.
#[component]
pub fn StartPage() -> impl IntoView {
    view! {
        <div class="start-page">
            <h1>"Atrium"</h1>
            <p>"Workplace portal"</p>
            <div class="start-page__actions">
                <a href="/login" class="btn btn--primary">
                    "Log in"
                </a>
                <a href="/register" class="btn">
                    "Create account"
                </a>
            </div>
        </div>
    }
}
