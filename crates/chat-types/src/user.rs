use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const USERNAME_MIN_BYTES: usize = 3;
const PASSWORD_MIN_BYTES: usize = 8;

/// A chat account as the backend reports it.
///
/// The backend also sends an image url and timestamps; those are not part of
/// the client's model and are dropped on decode.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: String,
    pub location: String,
}

/// Account-creation form contents.
///
/// Any combination of values is a valid `RegistrationRequest`, including a
/// `confirm_password` that differs from `password`. Call [`validate`] to
/// apply the account rules.
///
/// [`validate`]: RegistrationRequest::validate
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub username: String,
    pub password: String,
    #[serde(alias = "confirmPassword")]
    pub confirm_password: String,
    pub name: String,
    pub location: String,
}

impl RegistrationRequest {
    /// Checks the request against the account rules, reporting the first
    /// rule that fails. Location is free text and never checked.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.is_empty() {
            return Err(ValidationError::UsernameRequired);
        }
        // Lengths are byte counts, as the backend measures them.
        if self.username.len() < USERNAME_MIN_BYTES {
            return Err(ValidationError::UsernameTooShort {
                min: USERNAME_MIN_BYTES,
            });
        }
        if self.password.is_empty() {
            return Err(ValidationError::PasswordRequired);
        }
        if self.password.len() < PASSWORD_MIN_BYTES {
            return Err(ValidationError::PasswordTooShort {
                min: PASSWORD_MIN_BYTES,
            });
        }
        if self.confirm_password != self.password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn valid_request() -> RegistrationRequest {
        RegistrationRequest {
            username: "alice".into(),
            password: "hunter2hunter2".into(),
            confirm_password: "hunter2hunter2".into(),
            name: "Alice".into(),
            location: "Jakarta".into(),
        }
    }

    #[test]
    fn mismatched_passwords_are_structurally_valid() {
        let request = RegistrationRequest {
            confirm_password: "something-else".into(),
            ..valid_request()
        };
        assert_ne!(request.password, request.confirm_password);
        assert_eq!(request.username, "alice");
        assert_eq!(request.confirm_password, "something-else");
    }

    #[test]
    fn mismatched_passwords_decode_without_rejection() {
        let raw = r#"{
            "username": "bob",
            "password": "first-password",
            "confirm_password": "second-password",
            "name": "Bob",
            "location": "Bandung"
        }"#;
        let request: RegistrationRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.password, "first-password");
        assert_eq!(request.confirm_password, "second-password");
    }

    #[test]
    fn camel_case_confirmation_is_accepted() {
        let raw = r#"{
            "username": "bob",
            "password": "pw",
            "confirmPassword": "pw",
            "name": "Bob",
            "location": ""
        }"#;
        let request: RegistrationRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.confirm_password, "pw");
    }

    #[test]
    fn confirmation_serializes_with_backend_key() {
        let value = serde_json::to_value(valid_request()).unwrap();
        assert_eq!(value["confirm_password"], "hunter2hunter2");
        assert!(value.get("confirmPassword").is_none());
    }

    #[test]
    fn user_ignores_extra_backend_fields() {
        let raw = r#"{
            "id": "u_AbCdEf1234",
            "username": "alice",
            "name": "Alice",
            "location": "Jakarta",
            "image_url": "",
            "created_at": 1700000000000,
            "updated_at": 1700000000000
        }"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(
            user,
            User {
                id: "u_AbCdEf1234".into(),
                username: "alice".into(),
                name: "Alice".into(),
                location: "Jakarta".into(),
            }
        );
    }

    #[test]
    fn validate_accepts_complete_request() {
        assert_eq!(valid_request().validate(), Ok(()));
    }

    #[test]
    fn validate_reports_mismatch() {
        let request = RegistrationRequest {
            confirm_password: "hunter3hunter3".into(),
            ..valid_request()
        };
        let err = request.validate().unwrap_err();
        assert_eq!(err, ValidationError::PasswordMismatch);
        assert_eq!(err.code(), ErrorCode::PASSWORD_UNMATCH);
    }

    #[test]
    fn validate_checks_rules_in_order() {
        let empty = RegistrationRequest::default();
        assert_eq!(empty.validate(), Err(ValidationError::UsernameRequired));

        let short_username = RegistrationRequest {
            username: "al".into(),
            ..valid_request()
        };
        assert_eq!(
            short_username.validate(),
            Err(ValidationError::UsernameTooShort { min: 3 })
        );

        let no_password = RegistrationRequest {
            password: String::new(),
            ..valid_request()
        };
        assert_eq!(no_password.validate(), Err(ValidationError::PasswordRequired));

        let short_password = RegistrationRequest {
            password: "short".into(),
            confirm_password: "short".into(),
            ..valid_request()
        };
        assert_eq!(
            short_password.validate(),
            Err(ValidationError::PasswordTooShort { min: 8 })
        );

        let no_display_name = RegistrationRequest {
            name: String::new(),
            ..valid_request()
        };
        assert_eq!(no_display_name.validate(), Err(ValidationError::NameRequired));
    }

    #[test]
    fn validate_measures_lengths_in_bytes() {
        let request = RegistrationRequest {
            username: "张三".into(),
            password: "密码密码密".into(),
            confirm_password: "密码密码密".into(),
            name: "Zhang".into(),
            location: String::new(),
        };
        assert_eq!(request.validate(), Ok(()));

        let two_bytes = RegistrationRequest {
            username: "é".into(),
            ..valid_request()
        };
        assert_eq!(
            two_bytes.validate(),
            Err(ValidationError::UsernameTooShort { min: 3 })
        );
    }

    #[test]
    fn validate_ignores_location() {
        let request = RegistrationRequest {
            location: String::new(),
            ..valid_request()
        };
        assert!(request.validate().is_ok());
    }
}
