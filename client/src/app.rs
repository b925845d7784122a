//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notification_banner::NotificationBanner;
use crate::components::route_guard::{RequireAuth, RequireRoles};
use crate::config::AppConfig;
use crate::pages::{
    admin::{ADMIN_ROLES, AdminPage},
    dashboard::DashboardPage,
    login::LoginPage,
    unauthorized::UnauthorizedPage,
};

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
/// Provides the client config, mounts the notification banner (the error
/// channel's subscriber) and sets up client-side routing. Protected pages are
/// wrapped in route guards here.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppConfig::load());

    view! {
        <Stylesheet id="leptos" href="/pkg/finboard.css"/>
        <Title text="Finboard"/>

        <NotificationBanner/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                <Route path=StaticSegment("") view=ProtectedDashboard/>
                <Route path=StaticSegment("admin") view=ProtectedAdmin/>
            </Routes>
        </Router>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! {
        <RequireAuth>
            <DashboardPage/>
        </RequireAuth>
    }
}

#[component]
fn ProtectedAdmin() -> impl IntoView {
    let roles: Vec<String> = ADMIN_ROLES.iter().map(|r| (*r).to_owned()).collect();
    view! {
        <RequireAuth>
            <RequireRoles roles=roles.clone()>
                <AdminPage/>
            </RequireRoles>
        </RequireAuth>
    }
}
