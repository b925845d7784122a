//! Dashboard page: balances by currency, account cards, recent transactions.
//!
//! Mounted behind `RequireAuth`. Both lists are fetched once on mount; any
//! failure is already on the notification banner, so sections only render a
//! short inline placeholder.

use leptos::prelude::*;

use crate::components::account_card::AccountCard;
use crate::components::nav_bar::NavBar;
use crate::config::AppConfig;
use crate::net::api;
use crate::net::types::{Account, Transaction};
use crate::state::fetch::{FetchState, ListStatus};
use crate::util::money::{format_cents, totals_by_currency};

/// Rows shown in the recent-activity table.
pub const RECENT_TRANSACTION_LIMIT: u32 = 10;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let accounts = RwSignal::new(FetchState::<Vec<Account>>::default());
    let transactions = RwSignal::new(FetchState::<Vec<Transaction>>::default());

    Effect::new(move || {
        accounts.update(FetchState::start);
        transactions.update(FetchState::start);
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let result = api::fetch_accounts(&config).await;
            accounts.update(|s| s.finish(result));
            let result = api::fetch_transactions(&config, RECENT_TRANSACTION_LIMIT).await;
            transactions.update(|s| s.finish(result));
        });
    });

    let totals = move || {
        accounts.with(|s| {
            s.data
                .as_deref()
                .map(totals_by_currency)
                .unwrap_or_default()
                .into_iter()
                .map(|(currency, cents)| {
                    view! { <span class="dashboard-page__total">{format_cents(cents, &currency)}</span> }
                })
                .collect::<Vec<_>>()
        })
    };

    let account_cards = move || {
        accounts.with(|s| match s.list_status() {
            ListStatus::Loading => view! { <p class="dashboard-page__status">"Loading accounts..."</p> }.into_any(),
            ListStatus::Failed(message) => {
                view! { <p class="dashboard-page__status dashboard-page__status--error">{message}</p> }.into_any()
            }
            ListStatus::Empty => view! { <p class="dashboard-page__status">"No accounts linked yet."</p> }.into_any(),
            ListStatus::Ready => view! {
                <div class="dashboard-page__cards">
                    {s.data
                        .clone()
                        .unwrap_or_default()
                        .into_iter()
                        .map(|account| view! { <AccountCard account=account/> })
                        .collect::<Vec<_>>()}
                </div>
            }
            .into_any(),
        })
    };

    let recent = move || {
        transactions.with(|s| match s.list_status() {
            ListStatus::Loading => view! { <p class="dashboard-page__status">"Loading activity..."</p> }.into_any(),
            ListStatus::Failed(message) => {
                view! { <p class="dashboard-page__status dashboard-page__status--error">{message}</p> }.into_any()
            }
            ListStatus::Empty => view! { <p class="dashboard-page__status">"No recent activity."</p> }.into_any(),
            ListStatus::Ready => view! {
                <table class="transactions">
                    <tbody>
                        {s.data
                            .clone()
                            .unwrap_or_default()
                            .into_iter()
                            .map(transaction_row)
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            }
            .into_any(),
        })
    };

    view! {
        <div class="dashboard-page">
            <NavBar/>
            <header class="dashboard-page__header">
                <h1>"Overview"</h1>
                <div class="dashboard-page__totals">{totals}</div>
            </header>
            <section class="dashboard-page__section">
                <h2>"Accounts"</h2>
                {account_cards}
            </section>
            <section class="dashboard-page__section">
                <h2>"Recent activity"</h2>
                {recent}
            </section>
        </div>
    }
}

fn transaction_row(tx: Transaction) -> impl IntoView {
    let amount_class = if tx.amount_cents < 0 {
        "transactions__amount transactions__amount--debit"
    } else {
        "transactions__amount transactions__amount--credit"
    };
    let amount = format_cents(tx.amount_cents, &tx.currency);

    view! {
        <tr class="transactions__row">
            <td class="transactions__date">{tx.posted_on}</td>
            <td class="transactions__description">{tx.description}</td>
            <td class="transactions__category">{tx.category.unwrap_or_default()}</td>
            <td class=amount_class>{amount}</td>
        </tr>
    }
}
