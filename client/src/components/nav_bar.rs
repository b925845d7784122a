//! Top navigation bar with the viewer's name and a logout button.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::AppConfig;
use crate::state::session;
use crate::util::storage::BrowserStorage;

#[component]
pub fn NavBar() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let navigate = use_navigate();
    let viewer = RwSignal::new(None::<String>);

    let keys = config.storage.clone();
    Effect::new(move || {
        let name = session::read_user(&BrowserStorage, &keys).and_then(|u| u.display_name().map(str::to_owned));
        viewer.set(name);
    });

    let on_logout = move |_| {
        session::clear(&BrowserStorage, &config.storage);
        navigate(&config.login_path, NavigateOptions::default());
    };

    view! {
        <nav class="nav-bar">
            <a href="/" class="nav-bar__brand">"Finboard"</a>
            <a href="/" class="nav-bar__link">"Overview"</a>
            <a href="/admin" class="nav-bar__link">"Admin"</a>
            <span class="nav-bar__spacer"></span>
            <span class="nav-bar__viewer">{move || viewer.get().unwrap_or_default()}</span>
            <button class="btn" on:click=on_logout>
                "Log out"
            </button>
        </nav>
    }
}
