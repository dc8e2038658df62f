//! Success/error banner for one form's status pair.

use leptos::prelude::*;

use crate::state::status::StatusMessages;

/// Renders the success and error banners for a status pair. The pair's
/// invariant guarantees at most one is visible at a time.
#[component]
pub fn StatusBanner(#[prop(into)] messages: Signal<StatusMessages>) -> impl IntoView {
    let success = move || messages.get().success().to_owned();
    let error = move || messages.get().error().to_owned();

    view! {
        <Show when=move || !success().is_empty()>
            <div class="success">{success}</div>
        </Show>
        <Show when=move || !error().is_empty()>
            <div class="error">{error}</div>
        </Show>
    }
}
