//! Session token and current user for the browser session.
//!
//! `App` installs one [`SessionState`] at the root of the tree with
//! [`provide_session`]; components reach it through [`use_session`] or the
//! per-cell accessors. The state is not persisted, so a full page reload
//! starts signed out.

use chat_types::{LoginResponse, SessionToken, User};
use leptos::prelude::*;

/// Reactive session cells shared by the whole UI tree.
#[derive(Clone, Copy, Debug)]
pub struct SessionState {
    pub token: RwSignal<Option<SessionToken>>,
    pub user: RwSignal<Option<User>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            token: RwSignal::new(None),
            user: RwSignal::new(None),
        }
    }

    pub fn sign_in(&self, login: LoginResponse) {
        self.token.set(Some(login.token));
        self.user.set(Some(login.user));
    }

    pub fn sign_out(&self) {
        self.token.set(None);
        self.user.set(None);
    }

    /// Tracked read; use inside views and effects.
    pub fn is_authenticated(&self) -> bool {
        self.token.with(Option::is_some)
    }

    /// `Authorization` header value for the held token, if any.
    pub fn bearer(&self) -> Option<String> {
        self.token.with_untracked(|t| t.as_ref().map(SessionToken::bearer))
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Installs a fresh signed-out session on the current owner.
pub fn provide_session() -> SessionState {
    let state = SessionState::new();
    provide_context(state);
    state
}

/// Returns the session visible from the current owner, creating and
/// installing one on first access.
pub fn use_session() -> SessionState {
    use_context::<SessionState>().unwrap_or_else(provide_session)
}

pub fn use_session_token() -> RwSignal<Option<SessionToken>> {
    use_session().token
}

pub fn use_user() -> RwSignal<Option<User>> {
    use_session().user
}
