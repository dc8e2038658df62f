//! Top navigation bar with a brand label and a Back action.

use leptos::prelude::*;

/// Navigation bar shown above full-page forms.
#[component]
pub fn NavBar(brand: &'static str, on_back: Callback<()>) -> impl IntoView {
    view! {
        <div class="navbar">
            <div class="navbar__brand">{brand}</div>
            <div class="navbar__links">
                <button class="btn" on:click=move |_| on_back.run(())>
                    "Back"
                </button>
            </div>
        </div>
    }
}
