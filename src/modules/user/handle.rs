use crate::api::{error, success};
use crate::modules::user::{
    model::{self, DeleteUserModel},
    service::UserService,
};

pub async fn sign_up(
    user_service: &UserService,
    user_data: model::SignUpModel,
) -> Result<success::Success<model::UserResponse>, error::Error> {
    let user = user_service.sign_up(user_data).await?;
    Ok(success::Success::created(Some(user)).message("User Created Successfully"))
}

pub async fn get_user(
    user_service: &UserService,
    username: &str,
) -> Result<success::Success<model::UserResponse>, error::Error> {
    let user = user_service.get_by_username(username).await?;
    Ok(success::Success::ok(Some(user)).message("User retrieved successfully"))
}

pub async fn delete_user(
    user_service: &UserService,
    credentials: DeleteUserModel,
) -> Result<success::Success<()>, error::Error> {
    let username = user_service.delete(&credentials.username, &credentials.password).await?;
    Ok(success::Success::no_content().message(format!("User {username} Removed")))
}
