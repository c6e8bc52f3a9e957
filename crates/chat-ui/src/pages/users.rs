use chat_types::User;
use leptos::prelude::*;

use crate::api::DEFAULT_PAGE_SIZE;
#[cfg(feature = "hydrate")]
use crate::api::{error_message, get_user, list_users};
use crate::pages::account::UserCard;

/// A full page means there may be more after it.
fn has_next_page(loaded: usize, size: u32) -> bool {
    loaded >= size as usize
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let page = RwSignal::new(1u32);
    #[allow(unused_variables)]
    let (users, setUsers) = signal(Option::<Result<Vec<User>, String>>::None);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        Effect::new(move |_| {
            let current = page.get();
            spawn_local(async move {
                let result = list_users(current, DEFAULT_PAGE_SIZE)
                    .await
                    .map_err(|e| error_message(&e));
                setUsers.set(Some(result));
            });
        });
    }

    let canGoBack = move || page.get() > 1;
    let canGoForward = move || {
        users.with(|u| match u {
            Some(Ok(list)) => has_next_page(list.len(), DEFAULT_PAGE_SIZE),
            _ => false,
        })
    };

    view! {
        <div class="dashboard-header">
            <h1>"People"</h1>
            <p class="subtitle">{move || format!("Page {}", page.get())}</p>
        </div>
        {move || match users.get() {
            None => {
                view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        "Loading people..."
                    </div>
                }
                    .into_any()
            }
            Some(Err(e)) => {
                view! {
                    <div class="card">
                        <p class="login-error">"Failed to load users: " {e}</p>
                    </div>
                }
                    .into_any()
            }
            Some(Ok(list)) if list.is_empty() => {
                view! {
                    <div class="card">
                        <p>"Nobody here yet."</p>
                    </div>
                }
                    .into_any()
            }
            Some(Ok(list)) => {
                view! {
                    <div class="card">
                        <table>
                            <thead>
                                <tr>
                                    <th>"Username"</th>
                                    <th>"Name"</th>
                                    <th>"Location"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {list
                                    .into_iter()
                                    .map(|user| {
                                        view! {
                                            <tr>
                                                <td>
                                                    <a href=format!("/users/{}", user.id)>
                                                        {format!("@{}", user.username)}
                                                    </a>
                                                </td>
                                                <td>{user.name}</td>
                                                <td>{user.location}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
                    .into_any()
            }
        }}
        <div class="pager">
            <button
                class="btn btn-ghost btn-sm"
                disabled=move || !canGoBack()
                on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
            >
                "Previous"
            </button>
            <button
                class="btn btn-ghost btn-sm"
                disabled=move || !canGoForward()
                on:click=move |_| page.update(|p| *p += 1)
            >
                "Next"
            </button>
        </div>
    }
}

#[component]
pub fn UserProfilePage() -> impl IntoView {
    #[allow(unused_variables)]
    let (profile, setProfile) = signal(Option::<Result<User, String>>::None);

    #[cfg(feature = "hydrate")]
    {
        use leptos_router::hooks::use_params_map;
        use wasm_bindgen_futures::spawn_local;

        let params = use_params_map();
        Effect::new(move |_| {
            let id = params.with(|p| p.get("id")).unwrap_or_default();
            setProfile.set(None);
            spawn_local(async move {
                let result = get_user(id).await.map_err(|e| error_message(&e));
                setProfile.set(Some(result));
            });
        });
    }

    view! {
        <div class="dashboard-header">
            <h1>"Profile"</h1>
            <p class="subtitle"><a href="/users">"Back to people"</a></p>
        </div>
        {move || match profile.get() {
            None => {
                view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        "Loading profile..."
                    </div>
                }
                    .into_any()
            }
            Some(Ok(user)) => view! { <UserCard user /> }.into_any(),
            Some(Err(e)) => {
                view! {
                    <div class="card">
                        <p class="login-error">"Could not load this user: " {e}</p>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_page_may_have_more() {
        assert!(has_next_page(10, 10));
        assert!(!has_next_page(3, 10));
        assert!(!has_next_page(0, 10));
    }
}
