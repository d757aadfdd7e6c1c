//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use brighthealth_entity::user::{RegisterUser, UserPatch, UserRole};

/// Login form body (`application/x-www-form-urlencoded`).
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Registration request body.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Display name.
    pub full_name: String,
    /// Role, `patient` when omitted.
    #[serde(default)]
    pub role: UserRole,
    /// Initial active flag, `true` when omitted.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

impl From<RegisterRequest> for RegisterUser {
    fn from(req: RegisterRequest) -> Self {
        Self {
            email: req.email,
            username: req.username,
            full_name: req.full_name,
            role: req.role,
            is_active: req.is_active,
            password: req.password,
        }
    }
}

/// Partial user update body.
#[derive(Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// New email.
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    /// New display name.
    pub full_name: Option<String>,
    /// New password.
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: Option<String>,
    /// New active flag.
    pub is_active: Option<bool>,
}

impl std::fmt::Debug for UpdateUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateUserRequest")
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .field("is_active", &self.is_active)
            .finish_non_exhaustive()
    }
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            email: req.email,
            full_name: req.full_name,
            password: req.password,
            is_active: req.is_active,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_defaults_and_validation() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"email":"a@x.com","username":"alice","full_name":"Alice","password":"pw1"}"#,
        )
        .unwrap();
        assert_eq!(req.role, UserRole::Patient);
        assert!(req.is_active);
        assert!(req.validate().is_ok());

        let bad = RegisterRequest {
            email: "not-an-email".to_string(),
            ..req
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_update_validates_present_fields_only() {
        assert!(UpdateUserRequest::default().validate().is_ok());

        let bad = UpdateUserRequest {
            email: Some("nope".to_string()),
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_debug_omits_password() {
        let form = LoginForm {
            username: "alice".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(!format!("{form:?}").contains("hunter2"));
    }
}
