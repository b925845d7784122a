//! Admin page: user directory with role assignments.
//!
//! Routed behind `RequireAuth` and `RequireRoles(["admin"])`.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::config::AppConfig;
use crate::net::api;
use crate::net::types::UserSummary;
use crate::state::fetch::{FetchState, ListStatus};

/// Role names allowed to open the admin page.
pub const ADMIN_ROLES: &[&str] = &["admin"];

#[component]
pub fn AdminPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let users = RwSignal::new(FetchState::<Vec<UserSummary>>::default());

    Effect::new(move || {
        users.update(FetchState::start);
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let result = api::fetch_users(&config).await;
            users.update(|s| s.finish(result));
        });
    });

    let user_rows = move || {
        users.with(|s| match s.list_status() {
            ListStatus::Loading => view! { <p class="admin-page__status">"Loading users..."</p> }.into_any(),
            ListStatus::Failed(message) => {
                view! { <p class="admin-page__status admin-page__status--error">{message}</p> }.into_any()
            }
            ListStatus::Empty => view! { <p class="admin-page__status">"No users."</p> }.into_any(),
            ListStatus::Ready => view! {
                <table class="admin-page__users">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Roles"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {s.data
                            .clone()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|user| {
                                let roles = user.role_list();
                                view! {
                                    <tr>
                                        <td>{user.name.unwrap_or_default()}</td>
                                        <td>{user.email}</td>
                                        <td>{roles}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            }
            .into_any(),
        })
    };

    view! {
        <div class="admin-page">
            <NavBar/>
            <h1>"Users"</h1>
            {user_rows}
        </div>
    }
}
