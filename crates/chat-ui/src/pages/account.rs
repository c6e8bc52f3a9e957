use chat_types::User;
use leptos::prelude::*;

use crate::api::{error_message, rejects_session, GetAccount};
use crate::components::toast::use_toasts;
use crate::state::use_session;

#[component]
pub fn AccountPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let accountAction = ServerAction::<GetAccount>::new();
    let accountValue = accountAction.value();

    // A token with no loaded user is resolved against /auth/account.
    Effect::new(move |_| {
        let token = session.token.get();
        let hasUser = session.user.with(Option::is_some);
        if let Some(token) = token {
            if !hasUser && !accountAction.pending().get_untracked() {
                accountAction.dispatch(GetAccount { token: token.0 });
            }
        }
    });

    // Only a rejected token ends the session; an unreachable or failing
    // backend leaves it in place so the fetch can be retried.
    let (loadError, setLoadError) = signal(Option::<String>::None);
    Effect::new(move |_| match accountValue.get() {
        Some(Ok(user)) => {
            setLoadError.set(None);
            session.user.set(Some(user));
        }
        Some(Err(e)) if rejects_session(&e) => {
            toasts.error(format!("Session expired: {}", error_message(&e)));
            session.sign_out();
        }
        Some(Err(e)) => {
            let message = error_message(&e);
            toasts.error(message.clone());
            setLoadError.set(Some(message));
        }
        None => {}
    });

    let retry = move |_: leptos::ev::MouseEvent| {
        if let Some(token) = session.token.get_untracked() {
            setLoadError.set(None);
            accountAction.dispatch(GetAccount { token: token.0 });
        }
    };

    view! {
        <div class="dashboard-header">
            <h1>"Account"</h1>
            <p class="subtitle">"Your chat identity"</p>
        </div>
        {move || {
            match (session.is_authenticated(), session.user.get()) {
                (false, _) => {
                    view! {
                        <div class="card">
                            <p>"You are not signed in."</p>
                            <a href="/login" class="btn btn-primary">"Sign in"</a>
                        </div>
                    }
                        .into_any()
                }
                (true, None) if loadError.with(Option::is_some) => {
                    view! {
                        <div class="card">
                            <p class="login-error">
                                "Could not load your account: " {move || loadError.get()}
                            </p>
                            <button class="btn btn-primary" on:click=retry>"Retry"</button>
                        </div>
                    }
                        .into_any()
                }
                (true, None) => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Loading account..."
                        </div>
                    }
                        .into_any()
                }
                (true, Some(user)) => view! { <UserCard user /> }.into_any(),
            }
        }}
    }
}

/// Read-only card for one account.
#[component]
pub fn UserCard(user: User) -> impl IntoView {
    let location = if user.location.is_empty() {
        "\u{2014}".to_string()
    } else {
        user.location.clone()
    };

    view! {
        <div class="card user-card">
            <div class="card-title">{user.name.clone()}</div>
            <div class="metric-row">
                <span class="metric-label">"Username"</span>
                <span class="metric-value">{format!("@{}", user.username)}</span>
            </div>
            <div class="metric-row">
                <span class="metric-label">"Location"</span>
                <span class="metric-value">{location}</span>
            </div>
            <div class="metric-row">
                <span class="metric-label">"ID"</span>
                <span class="metric-value"><code>{user.id.clone()}</code></span>
            </div>
        </div>
    }
}
