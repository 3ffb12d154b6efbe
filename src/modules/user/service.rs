use log::info;
use std::sync::Arc;

use crate::api::error;
use crate::modules::user::model::{InsertUser, SIGN_UP_FIELDS, SignUpModel, UserResponse};
use crate::modules::user::repository::UserRepository;
use crate::utils::validate_in_order;

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository + Send + Sync>,
}

impl UserService {
    pub fn with_dependencies(repo: Arc<dyn UserRepository + Send + Sync>) -> Self {
        info!("UserService initialized with dependencies");
        UserService { repo }
    }

    pub async fn get_by_username(&self, username: &str) -> Result<UserResponse, error::SystemError> {
        self.repo
            .find_by_username(username)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| error::SystemError::not_found("User not found"))
    }

    pub async fn sign_up(&self, user: SignUpModel) -> Result<UserResponse, error::SystemError> {
        validate_in_order(&user, &SIGN_UP_FIELDS)?;
        let password =
            user.password.ok_or_else(|| error::SystemError::validation("No password given"))?;

        let existing = self.repo.find_by_username_or_email(&user.username, &user.email).await?;
        if existing.iter().any(|u| u.username == user.username) {
            return Err(error::SystemError::conflict("Username already exists"));
        }
        if existing.iter().any(|u| u.email == user.email) {
            return Err(error::SystemError::conflict("Email already exists"));
        }

        let new_user = InsertUser {
            username: user.username,
            password,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        };
        self.repo.create(&new_user).await?;

        let created = self.repo.find_by_username(&new_user.username).await?.ok_or_else(|| {
            error::SystemError::consistency("Unknown error occurred while trying to create user")
        })?;

        info!("User {} created", created.username);
        Ok(UserResponse::from(created))
    }

    /// Deletes the account when both fields match. Friendships, requests,
    /// memberships and administered groups go with it.
    pub async fn delete(&self, username: &str, password: &str) -> Result<String, error::SystemError> {
        let user = self.repo.find_by_credentials(username, password).await?.ok_or_else(|| {
            error::SystemError::unauthorized(
                "Username or Password was not correct, user not deleted",
            )
        })?;

        self.repo.delete_by_credentials(username, password).await?;

        if self.repo.find_by_credentials(username, password).await?.is_some() {
            return Err(error::SystemError::consistency("User was not removed"));
        }

        info!("User {} removed", user.username);
        Ok(user.username)
    }
}
