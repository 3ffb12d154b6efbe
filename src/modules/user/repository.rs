use crate::{
    api::error,
    modules::user::{model::InsertUser, schema::UserEntity},
};

#[async_trait::async_trait]
pub trait UserRepository {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserEntity>, error::SystemError>;

    /// Every user matching either field, so the caller can tell which one collided.
    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Vec<UserEntity>, error::SystemError>;

    async fn find_by_usernames(
        &self,
        usernames: &[&str],
    ) -> Result<Vec<UserEntity>, error::SystemError>;

    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserEntity>, error::SystemError>;

    async fn create(&self, user: &InsertUser) -> Result<(), error::SystemError>;

    async fn delete_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<u64, error::SystemError>;
}
