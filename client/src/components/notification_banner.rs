//! Notification banner: the one subscriber of the global error channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once in `App`. On the client it registers a handler that writes
//! into its own `NoticeState` signal, and unregisters on cleanup. Network
//! code anywhere in the app reaches it through `error_channel::global()`.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::net::error_channel::{self, HandlerId};
use crate::state::notice::NoticeState;

#[component]
pub fn NotificationBanner() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let notice = RwSignal::new(NoticeState::default());
    let registration = StoredValue::new(None::<HandlerId>);

    // Client-only: effects never run during SSR, so the server process never
    // registers a per-request signal with the process-wide channel.
    Effect::new(move || {
        let id = error_channel::global().register(move |n| {
            notice.try_update(|s| s.show(n));
        });
        registration.set_value(Some(id));
    });

    on_cleanup(move || {
        if let Some(id) = registration.try_get_value().flatten() {
            error_channel::global().unregister(id);
        }
    });

    schedule_auto_hide(notice, config);

    let on_close = move |_| notice.update(NoticeState::acknowledge);
    let banner_class = move || {
        format!("notification-banner notification-banner--{}", notice.with(|s| s.severity.as_str()))
    };

    view! {
        <Show when=move || notice.with(|s| s.open)>
            <div class=banner_class role="alert">
                <span class="notification-banner__message">{move || notice.with(|s| s.message.clone())}</span>
                <button class="notification-banner__close" aria-label="Dismiss" on:click=on_close>
                    "×"
                </button>
            </div>
        </Show>
    }
}

/// Hide each notification after its severity's delay, unless it has already
/// been replaced or dismissed.
fn schedule_auto_hide(notice: RwSignal<NoticeState>, config: AppConfig) {
    #[cfg(feature = "hydrate")]
    {
        let auto_hide = config.auto_hide;
        Effect::new(move || {
            let (open, seq, severity) = notice.with(|s| (s.open, s.seq, s.severity));
            if !open {
                return;
            }
            let delay = auto_hide.for_severity(severity);
            gloo_timers::callback::Timeout::new(delay, move || {
                notice.try_update(|s| s.expire(seq));
            })
            .forget();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (notice, config);
    }
}
