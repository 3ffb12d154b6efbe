use sqlx::{QueryBuilder, Sqlite};

use crate::{
    api::error,
    modules::user::{model::InsertUser, repository::UserRepository, schema::UserEntity},
};

#[derive(Clone)]
pub struct UserRepositorySqlite {
    pool: sqlx::SqlitePool,
}

impl UserRepositorySqlite {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UserRepository for UserRepositorySqlite {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserEntity>, error::SystemError> {
        let user = sqlx::query_as::<_, UserEntity>("SELECT * FROM users WHERE username = ?1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Vec<UserEntity>, error::SystemError> {
        let users = sqlx::query_as::<_, UserEntity>(
            "SELECT * FROM users WHERE username = ?1 OR email = ?2",
        )
        .bind(username)
        .bind(email)
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    async fn find_by_usernames(
        &self,
        usernames: &[&str],
    ) -> Result<Vec<UserEntity>, error::SystemError> {
        if usernames.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = QueryBuilder::<Sqlite>::new("SELECT * FROM users WHERE username IN (");
        let mut separated = query.separated(", ");
        for username in usernames {
            separated.push_bind(*username);
        }
        separated.push_unseparated(")");

        let users = query.build_query_as::<UserEntity>().fetch_all(&self.pool).await?;
        Ok(users)
    }

    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserEntity>, error::SystemError> {
        let user = sqlx::query_as::<_, UserEntity>(
            "SELECT * FROM users WHERE username = ?1 AND password = ?2",
        )
        .bind(username)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn create(&self, user: &InsertUser) -> Result<(), error::SystemError> {
        sqlx::query(
            "INSERT INTO users (username, password, first_name, last_name, email) VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<u64, error::SystemError> {
        let rows = sqlx::query("DELETE FROM users WHERE username = ?1 AND password = ?2")
            .bind(username)
            .bind(password)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows)
    }
}
