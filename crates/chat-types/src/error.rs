use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Numeric error code carried in backend error bodies.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ErrorCode(pub i32);

impl ErrorCode {
    // Auth
    pub const AUTHENTICATION_REQUIRED: Self = Self(10000);
    pub const TOKEN_INVALID: Self = Self(10001);
    pub const TOKEN_EXPIRED: Self = Self(10002);
    pub const EMAIL_OR_PASSWORD_INVALID: Self = Self(10003);
    // Requests
    pub const UNPARSABLE_JSON: Self = Self(40000);
    pub const FIELD_REQUIRED: Self = Self(40001);
    pub const FIELD_MIN_CHAR: Self = Self(40002);
    pub const FIELD_MAX_CHAR: Self = Self(40003);
    pub const FIELD_INVALID: Self = Self(40004);
    pub const PASSWORD_UNMATCH: Self = Self(40011);
    pub const PASSWORD_MIN_CHAR: Self = Self(40012);
    pub const PASSWORD_MAX_CHAR: Self = Self(40013);
    pub const USERNAME_ALREADY_TAKEN: Self = Self(40021);
    // Resources
    pub const RESOURCE_NOT_FOUND: Self = Self(60000);
    // Internal
    pub const INTERNAL_SERVER: Self = Self(90000);

    /// Code used when an error body could not be decoded.
    pub const UNKNOWN: Self = Self(0);

    pub fn is_auth(self) -> bool {
        (10000..20000).contains(&self.0)
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error body returned by the backend on any non-2xx response.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

/// Registration rule violations, in the order they are checked.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Username is required")]
    UsernameRequired,
    #[error("Username must be at least {min} characters")]
    UsernameTooShort { min: usize },
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("Password and Confirm Password must match")]
    PasswordMismatch,
    #[error("Name is required")]
    NameRequired,
}

impl ValidationError {
    /// The backend code for the same violation.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UsernameRequired | Self::PasswordRequired | Self::NameRequired => {
                ErrorCode::FIELD_REQUIRED
            }
            Self::UsernameTooShort { .. } => ErrorCode::FIELD_MIN_CHAR,
            Self::PasswordTooShort { .. } => ErrorCode::PASSWORD_MIN_CHAR,
            Self::PasswordMismatch => ErrorCode::PASSWORD_UNMATCH,
        }
    }
}

/// Failure talking to the backend API.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("{message} (status {status}, code {code})")]
    Backend {
        status: u16,
        code: ErrorCode,
        message: String,
    },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

/// Text that is not the `Display` form of any [`ApiError`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unrecognized api error: {0}")]
pub struct ParseApiError(String);

impl ApiError {
    /// Builds a backend error from a non-2xx status and its raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(resp) => Self::Backend {
                status,
                code: resp.code,
                message: resp.message,
            },
            Err(_) => Self::Backend {
                status,
                code: ErrorCode::UNKNOWN,
                message: if body.trim().is_empty() {
                    format!("backend responded with status {status}")
                } else {
                    body.trim().to_string()
                },
            },
        }
    }

    /// True when the backend rejected the session token.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Self::Backend { status, code, .. } => *status == 401 || code.is_auth(),
            _ => false,
        }
    }
}

// Server functions carry `ApiError` across the wire as its `Display` text, so
// parsing must invert it exactly.
impl std::str::FromStr for ApiError {
    type Err = ParseApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix("request failed: ") {
            return Ok(Self::Transport(rest.to_string()));
        }
        if let Some(rest) = s.strip_prefix("unexpected response body: ") {
            return Ok(Self::Decode(rest.to_string()));
        }
        if let Some(rest) = s.strip_prefix("invalid url: ") {
            return Ok(Self::InvalidUrl(rest.to_string()));
        }

        let backend = s
            .strip_suffix(')')
            .and_then(|rest| rest.rsplit_once(" (status "))
            .and_then(|(message, tail)| {
                let (status, code) = tail.split_once(", code ")?;
                Some(Self::Backend {
                    status: status.parse().ok()?,
                    code: ErrorCode(code.parse().ok()?),
                    message: message.to_string(),
                })
            });
        backend.ok_or_else(|| ParseApiError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_error_body() {
        let err = ApiError::from_response(
            400,
            r#"{"code":40021,"message":"Username is already taken"}"#,
        );
        assert_eq!(
            err,
            ApiError::Backend {
                status: 400,
                code: ErrorCode::USERNAME_ALREADY_TAKEN,
                message: "Username is already taken".into(),
            }
        );
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn undecodable_body_keeps_status() {
        let err = ApiError::from_response(502, "  ");
        assert!(matches!(
            err,
            ApiError::Backend {
                code: ErrorCode::UNKNOWN,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "backend responded with status 502 (status 502, code 0)"
        );
    }

    #[test]
    fn auth_codes_are_unauthorized() {
        let err = ApiError::from_response(401, r#"{"code":10001,"message":"Invalid token"}"#);
        assert!(err.is_unauthorized());
        assert!(ErrorCode::TOKEN_EXPIRED.is_auth());
        assert!(!ErrorCode::RESOURCE_NOT_FOUND.is_auth());
        assert!(!ApiError::Transport("connection refused".into()).is_unauthorized());
    }

    #[test]
    fn validation_messages_match_backend_wording() {
        assert_eq!(
            ValidationError::UsernameTooShort { min: 3 }.to_string(),
            "Username must be at least 3 characters"
        );
        assert_eq!(ValidationError::NameRequired.code(), ErrorCode::FIELD_REQUIRED);
        assert_eq!(
            ValidationError::PasswordTooShort { min: 8 }.code(),
            ErrorCode::PASSWORD_MIN_CHAR
        );
    }

    #[test]
    fn display_text_parses_back() {
        let errors = [
            ApiError::Transport("connection refused".into()),
            ApiError::Decode("expected value at line 1 column 1".into()),
            ApiError::InvalidUrl("relative URL without a base".into()),
            ApiError::Backend {
                status: 401,
                code: ErrorCode::TOKEN_EXPIRED,
                message: "Token (status) expired".into(),
            },
            ApiError::from_response(502, "upstream down"),
        ];
        for err in errors {
            assert_eq!(err.to_string().parse::<ApiError>(), Ok(err));
        }
        assert!("no such error".parse::<ApiError>().is_err());
    }
}
