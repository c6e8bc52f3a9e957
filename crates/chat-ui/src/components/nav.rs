use leptos::prelude::*;

use crate::state::use_session;

#[component]
pub fn Nav() -> impl IntoView {
    let session = use_session();

    view! {
        <nav class="nav-sidebar">
            <div class="nav-brand">
                <div class="brand-icon">"C"</div>
                <span class="brand-text">"Chat"</span>
            </div>
            <ul class="nav-links">
                <li class="nav-item">
                    <a href="/">"Account"</a>
                </li>
                <li class="nav-item">
                    <a href="/users">"People"</a>
                </li>
            </ul>
            {move || {
                if session.is_authenticated() {
                    let handle = session
                        .user
                        .get()
                        .map(|u| format!("@{}", u.username))
                        .unwrap_or_default();
                    view! {
                        <div class="nav-session">
                            <span class="nav-user">{handle}</span>
                            <a
                                href="/login"
                                class="btn btn-ghost btn-sm"
                                on:click=move |_| session.sign_out()
                            >
                                "Sign out"
                            </a>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="nav-session">
                            <a href="/login" class="btn btn-ghost btn-sm">"Sign in"</a>
                            <a href="/register" class="btn btn-ghost btn-sm">"Register"</a>
                        </div>
                    }
                        .into_any()
                }
            }}
        </nav>
    }
}
