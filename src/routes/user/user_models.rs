use serde::{Deserialize, Serialize};

use crate::error::{ApiError, FieldErrors, BLANK_FIELD, REQUIRED_FIELD};
use crate::models::user::User;

pub const PASSWORD_MIN_LENGTH: usize = 5;

// Registration request and response
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();

        let email = self.email.trim();
        if email.is_empty() {
            errors.insert("email".into(), vec![BLANK_FIELD.into()]);
        } else if !email.contains('@') {
            errors.insert("email".into(), vec!["Enter a valid email address.".into()]);
        }

        if self.password.is_empty() {
            errors.insert("password".into(), vec![BLANK_FIELD.into()]);
        } else if self.password.chars().count() < PASSWORD_MIN_LENGTH {
            errors.insert(
                "password".into(),
                vec![format!(
                    "Ensure this field has at least {} characters.",
                    PASSWORD_MIN_LENGTH
                )],
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(errors))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}

// Token request and response
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub remember_me: bool,
}

impl TokenRequest {
    /// The `(email, password)` pair, or per-field errors for whichever is missing or blank.
    pub fn credentials(&self) -> Result<(&str, &str), ApiError> {
        let mut errors = FieldErrors::new();
        let email = required(&mut errors, "email", self.email.as_deref().map(str::trim));
        let password = required(&mut errors, "password", self.password.as_deref());

        match (email, password) {
            (Some(email), Some(password)) => Ok((email, password)),
            _ => Err(ApiError::Validation(errors)),
        }
    }
}

fn required<'a>(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<&'a str>,
) -> Option<&'a str> {
    match value {
        None => {
            errors.insert(field.into(), vec![REQUIRED_FIELD.into()]);
            None
        }
        Some("") => {
            errors.insert(field.into(), vec![BLANK_FIELD.into()]);
            None
        }
        Some(value) => Some(value),
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
