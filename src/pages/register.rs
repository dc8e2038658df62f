//! Registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::status_banner::StatusBanner;
use crate::state::register::RegisterForm;

/// Registration form — creates an account, then redirects to the login
/// page after a short delay. There is no auto-login.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegisterForm::default());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            let req = form.with(RegisterForm::request);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                log::info!("registering {}", req.username);
                let outcome = crate::net::api::register(&req).await;
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
        move |_| navigate("/", NavigateOptions::default())
    };

    let go_to_login = {
        let navigate = use_navigate();
        move |_| navigate("/login", NavigateOptions::default())
    };

    view! {
        <div class="register-page">
            <div class="card">
                <h2>"Create Account"</h2>
                <form on:submit=on_submit>
                    <label class="form-field">
                        "Username"
                        <input
                            type="text"
                            required=true
                            prop:value=move || form.get().username
                            on:input=move |ev| {
                                form.update(|f| f.username = event_target_value(&ev));
                            }
                        />
                    </label>
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
                        "Password"
                        <input
                            type="password"
                            required=true
                            prop:value=move || form.get().password
                            on:input=move |ev| {
                                form.update(|f| f.password = event_target_value(&ev));
                            }
                        />
                    </label>

                    <StatusBanner messages=Signal::derive(move || form.get().status.clone())/>

                    <div class="card__actions">
                        <button type="submit" class="btn btn--primary">
                            "Submit"
                        </button>
                        <button type="button" class="btn" on:click=go_back>
                            "Back to Start"
                        </button>
                    </div>
                </form>
                <div class="card__links">
                    <a on:click=go_to_login>"Already have an account? Log in"</a>
                </div>
            </div>
        </div>
    }
}
