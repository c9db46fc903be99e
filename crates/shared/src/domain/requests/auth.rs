use crate::model::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    pub role: UserRole,

    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    #[serde(default)]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register() -> RegisterRequest {
        RegisterRequest {
            email: "a@co.com".into(),
            password: "password123".into(),
            role: UserRole::Company,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            phone: None,
        }
    }

    #[test]
    fn accepts_valid_registration() {
        assert!(register().validate().is_ok());
    }

    #[test]
    fn rejects_short_password_and_bad_email() {
        let mut req = register();
        req.password = "short".into();
        req.email = "not-an-email".into();

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("password"));
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn role_uses_snake_case_on_the_wire() {
        let req: RegisterRequest = serde_json::from_value(serde_json::json!({
            "email": "s@seek.er",
            "password": "password123",
            "role": "job_seeker",
            "first_name": "Sam",
            "last_name": "Seeker"
        }))
        .unwrap();

        assert_eq!(req.role, UserRole::JobSeeker);
        assert_eq!(req.phone, None);
    }
}
