//! Password reset page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::status_banner::StatusBanner;
use crate::state::reset::ResetForm;

/// Password reset form — sets a new password for an email address,
/// then redirects to the login page after a short delay.
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let form = RwSignal::new(ResetForm::default());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            let req = form.with(ResetForm::request);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::reset_password(&req).await;
                let ok = outcome.is_ok();
                form.update(|f| f.apply(outcome));
                if ok {
                    gloo_timers::future::TimeoutFuture::new(2_000).await;
                    navigate("/login", NavigateOptions::default());
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
        }
    };

    let go_back = {
        let navigate = use_navigate();
        move |_| navigate("/login", NavigateOptions::default())
    };

    view! {
        <div class="reset-page">
            <div class="card">
                <h2>"Reset Password"</h2>
                <form on:submit=on_submit>
                    <label class="form-field">
                        "Email"
                        <input
                            type="email"
                            required=true
                            prop:value=move || form.get().email
                            on:input=move |ev| {
                                form.update(|f| f.email = event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="form-field">
                        "New Password"
                        <input
                            type="password"
                            required=true
                            prop:value=move || form.get().new_password
                            on:input=move |ev| {
                                form.update(|f| f.new_password = event_target_value(&ev));
                            }
                        />
                    </label>

                    <StatusBanner messages=Signal::derive(move || form.get().status.clone())/>

                    <div class="card__actions">
                        <button type="submit" class="btn btn--primary">
                            "Change Password"
                        </button>
                        <button type="button" class="btn" on:click=go_back>
                            "Back"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
