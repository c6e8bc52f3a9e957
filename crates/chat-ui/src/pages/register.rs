use chat_types::RegistrationRequest;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::api::{error_message, Register};
use crate::components::toast::use_toasts;

/// First rule the form breaks, phrased for display. The backend applies the
/// same rules again on submit.
fn precheck(request: &RegistrationRequest) -> Option<String> {
    request.validate().err().map(|e| e.to_string())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = use_toasts();
    let navigate = use_navigate();
    let registerAction = ServerAction::<Register>::new();
    let registerValue = registerAction.value();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmPassword = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let formError = RwSignal::new(None::<String>);

    Effect::new(move |_| match registerValue.get() {
        Some(Ok(user)) => {
            toasts.success(format!("Welcome, {}! Sign in to continue.", user.name));
            navigate("/login", Default::default());
        }
        Some(Err(e)) => formError.set(Some(error_message(&e))),
        None => {}
    });

    let onSubmit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if registerAction.pending().get_untracked() {
            return;
        }
        let request = RegistrationRequest {
            username: username.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            confirm_password: confirmPassword.get_untracked(),
            name: name.get_untracked().trim().to_string(),
            location: location.get_untracked().trim().to_string(),
        };
        if let Some(msg) = precheck(&request) {
            formError.set(Some(msg));
            return;
        }
        formError.set(None);
        registerAction.dispatch(Register { request });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"C"</div>
                    <h1>"Create account"</h1>
                    <p>"Pick a username other people can find you by"</p>
                </div>

                {move || formError.get().map(|msg| view! { <div class="login-error">{msg}</div> })}

                <form on:submit=onSubmit>
                    <Field id="username" label="Username" kind="text" value=username />
                    <Field id="name" label="Name" kind="text" value=name />
                    <Field id="location" label="Location" kind="text" value=location />
                    <Field id="password" label="Password" kind="password" value=password />
                    <Field
                        id="confirm_password"
                        label="Confirm Password"
                        kind="password"
                        value=confirmPassword
                    />
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || registerAction.pending().get()
                    >
                        "Register"
                    </button>
                </form>

                <p class="login-footer">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

#[component]
fn Field(
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=kind
                id=id
                name=id
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
