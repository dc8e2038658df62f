//! Account settings page: profile update and password change.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::NavBar;
use crate::components::status_banner::StatusBanner;
use crate::state::account::AccountForm;
use crate::state::session::{SessionState, landing_route};

/// Account settings page with separate profile and password forms.
#[component]
pub fn AccountSettingsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let form = RwSignal::new(AccountForm::default());

    // Track the session for as long as the page is mounted: any change
    // to the current user re-populates the profile fields. The effect
    // is disposed with the page.
    Effect::new(move || {
        if let Some(user) = session.get().user {
            form.update(|f| f.sync_from(&user));
        }
    });

    let navigate = use_navigate();
    let on_back = Callback::new(move |()| {
        let target = landing_route(session.get().user.as_ref());
        navigate(target, NavigateOptions::default());
    });

    let on_update = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            let req = form.with(AccountForm::update_request);
            leptos::task::spawn_local(async move {
                log::info!("updating account for {}", req.username);
                let outcome = crate::net::api::update_account(&req).await;
                let ok = outcome.is_ok();
                form.update(|f| f.apply_update(outcome));
                if ok {
                    gloo_timers::future::TimeoutFuture::new(3_000).await;
                    form.update(|f| f.update_status.clear_success());
                }
            });
        }
    };

    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            // A confirmation mismatch records its error here and never
            // reaches the network.
            let Some(req) = form.try_update(AccountForm::begin_password_change).flatten() else {
                return;
            };
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::reset_password(&req).await;
                let ok = outcome.is_ok();
                form.update(|f| f.apply_password_change(outcome));
                if ok {
                    gloo_timers::future::TimeoutFuture::new(3_000).await;
                    form.update(|f| f.password_status.clear_success());
                }
            });
        }
    };

    view! {
        <NavBar brand="Account Settings" on_back=on_back/>

        <div class="settings-page">
            <div class="card">
                <h2>"Account Settings"</h2>

                <form on:submit=on_update>
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

                    <StatusBanner messages=Signal::derive(move || form.get().update_status.clone())/>

                    <button type="submit" class="btn btn--primary">
                        "Update Account"
                    </button>
                </form>

                <hr/>

                <h3>"Change Password"</h3>
                <form on:submit=on_change_password>
                    <label class="form-field">
                        "Current Password"
                        <input
                            type="password"
                            required=true
                            prop:value=move || form.get().current_password
                            on:input=move |ev| {
                                form.update(|f| f.current_password = event_target_value(&ev));
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
                    <label class="form-field">
                        "Confirm New Password"
                        <input
                            type="password"
                            required=true
                            prop:value=move || form.get().confirm_password
                            on:input=move |ev| {
                                form.update(|f| f.confirm_password = event_target_value(&ev));
                            }
                        />
                    </label>

                    <StatusBanner messages=Signal::derive(move || form.get().password_status.clone())/>

                    <button type="submit" class="btn btn--primary">
                        "Change Password"
                    </button>
                </form>
            </div>
        </div>
    }
}
