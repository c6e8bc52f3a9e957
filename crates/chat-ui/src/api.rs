//! Server functions the pages call, plus the backend paths they map onto.

use chat_types::{ApiError, LoginResponse, RegistrationRequest, User};
use leptos::prelude::*;

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const ACCOUNT_PATH: &str = "/auth/account";
/// Directory root. A single user lives one encoded segment below it.
pub const USERS_PATH: &str = "/users";

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page numbers start at 1; zero page or size is bumped to 1.
pub fn users_path(page: u32, size: u32) -> String {
    format!("{USERS_PATH}?page={}&size={}", page.max(1), size.max(1))
}

/// User-facing text for a failed server function call.
pub fn error_message(err: &ServerFnError<ApiError>) -> String {
    match err {
        ServerFnError::WrappedServerError(ApiError::Backend { message, .. }) => message.clone(),
        ServerFnError::WrappedServerError(other) => other.to_string(),
        ServerFnError::ServerError(message) => message.clone(),
        other => other.to_string(),
    }
}

/// True only when the backend itself rejected the session token. Transport
/// failures, decode errors and 5xx responses leave the session alone.
pub fn rejects_session(err: &ServerFnError<ApiError>) -> bool {
    matches!(err, ServerFnError::WrappedServerError(e) if e.is_unauthorized())
}

#[server]
pub async fn login(
    username: String,
    password: String,
) -> Result<LoginResponse, ServerFnError<ApiError>> {
    use chat_types::LoginRequest;

    let backend = crate::backend::BackendClient::from_context()?;
    backend
        .login(&LoginRequest { username, password })
        .await
        .map_err(ServerFnError::WrappedServerError)
}

#[server]
pub async fn register(request: RegistrationRequest) -> Result<User, ServerFnError<ApiError>> {
    let backend = crate::backend::BackendClient::from_context()?;
    backend
        .register(&request)
        .await
        .map_err(ServerFnError::WrappedServerError)
}

#[server]
pub async fn get_account(token: String) -> Result<User, ServerFnError<ApiError>> {
    use chat_types::SessionToken;

    let backend = crate::backend::BackendClient::from_context()?;
    backend
        .account(&SessionToken(token))
        .await
        .map_err(ServerFnError::WrappedServerError)
}

#[server]
pub async fn get_user(id: String) -> Result<User, ServerFnError<ApiError>> {
    let backend = crate::backend::BackendClient::from_context()?;
    backend
        .user(&id)
        .await
        .map_err(ServerFnError::WrappedServerError)
}

#[server]
pub async fn list_users(page: u32, size: u32) -> Result<Vec<User>, ServerFnError<ApiError>> {
    let backend = crate::backend::BackendClient::from_context()?;
    backend
        .users(page, size)
        .await
        .map_err(ServerFnError::WrappedServerError)
}

#[cfg(test)]
mod tests {
    use chat_types::ErrorCode;

    use super::*;

    fn backend(status: u16, code: ErrorCode) -> ServerFnError<ApiError> {
        ServerFnError::WrappedServerError(ApiError::Backend {
            status,
            code,
            message: "Token is invalid".into(),
        })
    }

    #[test]
    fn users_path_clamps_to_first_page() {
        assert_eq!(users_path(2, 10), "/users?page=2&size=10");
        assert_eq!(users_path(0, 0), "/users?page=1&size=1");
    }

    #[test]
    fn error_message_prefers_backend_message() {
        let err = ServerFnError::WrappedServerError(ApiError::Backend {
            status: 400,
            code: ErrorCode::EMAIL_OR_PASSWORD_INVALID,
            message: "Email or Password Invalid".into(),
        });
        assert_eq!(error_message(&err), "Email or Password Invalid");

        let err: ServerFnError<ApiError> =
            ServerFnError::WrappedServerError(ApiError::Transport("connection refused".into()));
        assert_eq!(error_message(&err), "request failed: connection refused");

        let err: ServerFnError<ApiError> =
            ServerFnError::ServerError("backend client unavailable".into());
        assert_eq!(error_message(&err), "backend client unavailable");
    }

    #[test]
    fn only_backend_auth_failures_reject_the_session() {
        assert!(rejects_session(&backend(401, ErrorCode::TOKEN_INVALID)));
        assert!(rejects_session(&backend(403, ErrorCode::TOKEN_EXPIRED)));

        assert!(!rejects_session(&backend(500, ErrorCode::INTERNAL_SERVER)));
        assert!(!rejects_session(&backend(502, ErrorCode::UNKNOWN)));
        assert!(!rejects_session(&ServerFnError::WrappedServerError(
            ApiError::Transport("connection refused".into())
        )));
        assert!(!rejects_session(&ServerFnError::WrappedServerError(
            ApiError::Decode("expected value".into())
        )));
        assert!(!rejects_session(&ServerFnError::ServerError(
            "backend client unavailable".into()
        )));
    }
}
