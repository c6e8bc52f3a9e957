use leptos::prelude::*;

const TOAST_LIFETIME: std::time::Duration = std::time::Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub level: ToastLevel,
}

/// Handle for raising notifications; obtain with [`use_toasts`].
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastContext {
    pub fn success(&self, message: impl Into<String>) {
        self.push(message.into(), ToastLevel::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message.into(), ToastLevel::Error);
    }

    fn push(&self, message: String, level: ToastLevel) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, message, level }));

        let toasts = self.toasts;
        set_timeout(move || toasts.update(|list| dismiss(list, id)), TOAST_LIFETIME);
    }
}

fn dismiss(toasts: &mut Vec<Toast>, id: u64) {
    toasts.retain(|t| t.id != id);
}

pub fn use_toasts() -> ToastContext {
    expect_context::<ToastContext>()
}

/// Provides toast context and renders the toast stack. Mount once near the
/// root.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let toasts = RwSignal::new(Vec::<Toast>::new());
    provide_context(ToastContext {
        toasts,
        next_id: StoredValue::new(0),
    });

    view! {
        {children()}
        <div class="toast-container">
            <For each=move || toasts.get() key=|toast| toast.id let:toast>
                <div class=toast.level.class()>{toast.message.clone()}</div>
            </For>
        </div>
    }
}
