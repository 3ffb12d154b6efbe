use sqlx::prelude::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
