//! Login page — the navigation target for the redirect flows.

use leptos::prelude::*;

/// Login page. Sign-in itself goes through the server's session
/// endpoint; this page carries the links into the other auth flows.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="card">
                <h2>"Log in"</h2>
                <a href="/api/auth/login" class="btn btn--primary">
                    "Sign in"
                </a>
                <div class="card__links">
                    <a href="/register">"Need an account? Register"</a>
                    <a href="/reset-password">"Forgot your password?"</a>
                </div>
            </div>
        </div>
    }
}
