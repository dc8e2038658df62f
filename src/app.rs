//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    account_settings::AccountSettingsPage,
    home::{AdminHomePage, UserHomePage},
    login::LoginPage,
    register::RegisterPage,
    reset_password::ResetPasswordPage,
    start::StartPage,
};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session context and sets up client-side routing.
/// The session is resolved once on startup; every page observes the same
/// signal afterwards, so a login or logout elsewhere re-renders whatever
/// depends on the current user.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            session.update(|s| {
                s.user = user;
                s.loading = false;
            });
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/atrium-client.css"/>
        <Title text="Atrium"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=StartPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                <Route path=StaticSegment("account-settings") view=AccountSettingsPage/>
                <Route path=StaticSegment("admin-main") view=AdminHomePage/>
                <Route path=StaticSegment("user-main") view=UserHomePage/>
            </Routes>
        </Router>
    }
}
