//! Minor-unit currency formatting and balance totals.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

use std::collections::BTreeMap;

use crate::net::types::Account;

/// Format signed minor units, e.g. `-123456` USD as `-$1,234.56`.
///
/// Currencies without a known symbol are suffixed with their code.
#[must_use]
pub fn format_cents(cents: i64, currency: &str) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let whole = group_thousands(abs / 100);
    let frac = abs % 100;
    match symbol(currency) {
        Some(symbol) => format!("{sign}{symbol}{whole}.{frac:02}"),
        None => format!("{sign}{whole}.{frac:02} {currency}"),
    }
}

fn symbol(currency: &str) -> Option<&'static str> {
    match currency {
        "USD" | "CAD" | "AUD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        _ => None,
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Net balance per currency, ordered by currency code.
#[must_use]
pub fn totals_by_currency(accounts: &[Account]) -> Vec<(String, i64)> {
    let mut totals = BTreeMap::<&str, i64>::new();
    for account in accounts {
        *totals.entry(account.currency.as_str()).or_default() += account.balance_cents;
    }
    totals.into_iter().map(|(c, t)| (c.to_owned(), t)).collect()
}
