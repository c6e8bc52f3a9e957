use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::api::{error_message, Login};
use crate::state::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let loginAction = ServerAction::<Login>::new();
    let loginValue = loginAction.value();

    // Successful logins land in the session, then leave the page.
    Effect::new(move |_| {
        if let Some(Ok(resp)) = loginValue.get() {
            session.sign_in(resp);
            navigate("/", Default::default());
        }
    });

    let errorMessage = move || {
        loginValue
            .get()
            .and_then(|result| result.err())
            .map(|e| error_message(&e))
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"C"</div>
                    <h1>"Sign in"</h1>
                    <p>"Use your chat username and password"</p>
                </div>

                {move || errorMessage().map(|msg| view! { <div class="login-error">{msg}</div> })}

                <ActionForm action=loginAction>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input type="text" id="username" name="username" autocomplete="username" required />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            autocomplete="current-password"
                            required
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=move || loginAction.pending().get()>
                        "Sign In"
                    </button>
                </ActionForm>

                <p class="login-footer">
                    "No account yet? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
