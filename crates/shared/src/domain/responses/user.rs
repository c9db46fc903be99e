use crate::model::{User, UserRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user, safe to put on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// model to response
impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        UserResponse {
            id: value.id,
            email: value.email,
            role: value.role,
            first_name: value.first_name,
            last_name: value.last_name,
            phone: value.phone,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Full account record returned by register and login, bcrypt digest included.
/// HTTP handlers narrow it to [`UserResponse`].
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthUserResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub password_hash: String,
}

impl From<User> for AuthUserResponse {
    fn from(mut value: User) -> Self {
        let password_hash = std::mem::take(&mut value.password_hash);
        AuthUserResponse {
            user: UserResponse::from(value),
            password_hash,
        }
    }
}

impl From<AuthUserResponse> for UserResponse {
    fn from(value: AuthUserResponse) -> Self {
        value.user
    }
}

pub fn to_user_response(opt: Option<User>) -> Option<UserResponse> {
    opt.map(UserResponse::from)
}
