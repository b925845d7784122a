//! Dashboard card for one account.

use leptos::prelude::*;

use crate::net::types::Account;
use crate::util::money::format_cents;

#[component]
pub fn AccountCard(account: Account) -> impl IntoView {
    let balance_class = if account.balance_cents < 0 {
        "account-card__balance account-card__balance--negative"
    } else {
        "account-card__balance"
    };
    let balance = format_cents(account.balance_cents, &account.currency);
    let kind = account.kind.label();

    view! {
        <div class="account-card">
            <span class="account-card__kind">{kind}</span>
            <h3 class="account-card__name">{account.name}</h3>
            <span class=balance_class>{balance}</span>
        </div>
    }
}
