use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{modules::user::schema::UserEntity, utils::validate_password_policy};

/// Fields in the order their rules are checked.
pub const SIGN_UP_FIELDS: [&str; 2] = ["username", "password"];

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignUpModel {
    #[validate(length(min = 1, message = "Username invalid"))]
    pub username: String,
    #[validate(
        required(message = "No password given"),
        custom(function = "validate_password_policy")
    )]
    pub password: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl SignUpModel {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        SignUpModel {
            username: username.into(),
            password: Some(password.into()),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteUserModel {
    pub username: String,
    pub password: String,
}

pub struct InsertUser {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<UserEntity> for UserResponse {
    fn from(entity: UserEntity) -> Self {
        UserResponse {
            username: entity.username,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
        }
    }
}
