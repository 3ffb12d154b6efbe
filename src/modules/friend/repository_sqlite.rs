use sqlx::{QueryBuilder, Sqlite};

use crate::{
    api::error,
    modules::friend::{
        model::AcceptOutcome,
        repository::{FriendRepo, FriendRepository, FriendRequestRepository},
        schema::{FriendEntity, FriendRequestEntity},
    },
    utils::canonical_pair,
};

#[derive(Clone)]
pub struct FriendRepositorySqlite {
    pool: sqlx::SqlitePool,
}

impl FriendRepositorySqlite {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl FriendRepository for FriendRepositorySqlite {
    async fn find_friendship(
        &self,
        username_a: &str,
        username_b: &str,
    ) -> Result<Option<FriendEntity>, error::SystemError> {
        let (user_a, user_b) = canonical_pair(username_a, username_b);

        let friendship = sqlx::query_as::<_, FriendEntity>(
            "SELECT username, friend FROM friends WHERE username = ?1 AND friend = ?2",
        )
        .bind(user_a)
        .bind(user_b)
        .fetch_optional(&self.pool)
        .await?;

        Ok(friendship)
    }

    async fn find_friends(&self, username: &str) -> Result<Vec<String>, error::SystemError> {
        let friends = sqlx::query_scalar::<_, String>(
            r#"
            SELECT CASE WHEN username = ?1 THEN friend ELSE username END
            FROM friends
            WHERE username = ?1 OR friend = ?1
            ORDER BY rowid
            "#,
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;

        Ok(friends)
    }

    async fn find_friends_among(
        &self,
        username: &str,
        candidates: &[String],
    ) -> Result<Vec<String>, error::SystemError> {
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = QueryBuilder::<Sqlite>::new(
            "SELECT CASE WHEN username = ",
        );
        query.push_bind(username);
        query.push(" THEN friend ELSE username END FROM friends WHERE (username = ");
        query.push_bind(username);
        query.push(" AND friend IN (");
        let mut separated = query.separated(", ");
        for candidate in candidates {
            separated.push_bind(candidate.as_str());
        }
        query.push(")) OR (friend = ");
        query.push_bind(username);
        query.push(" AND username IN (");
        let mut separated = query.separated(", ");
        for candidate in candidates {
            separated.push_bind(candidate.as_str());
        }
        query.push(")) ORDER BY rowid");

        let friends = query.build_query_scalar::<String>().fetch_all(&self.pool).await?;
        Ok(friends)
    }

    async fn delete_friendship(
        &self,
        username_a: &str,
        username_b: &str,
    ) -> Result<u64, error::SystemError> {
        let (user_a, user_b) = canonical_pair(username_a, username_b);

        let rows = sqlx::query("DELETE FROM friends WHERE username = ?1 AND friend = ?2")
            .bind(user_a)
            .bind(user_b)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows)
    }
}

#[async_trait::async_trait]
impl FriendRequestRepository for FriendRepositorySqlite {
    async fn find_friend_request(
        &self,
        sender: &str,
        receiver: &str,
    ) -> Result<Option<FriendRequestEntity>, error::SystemError> {
        let request = sqlx::query_as::<_, FriendRequestEntity>(
            "SELECT * FROM friend_requests WHERE username = ?1 AND other = ?2",
        )
        .bind(sender)
        .bind(receiver)
        .fetch_optional(&self.pool)
        .await?;

        Ok(request)
    }

    async fn find_friend_requests_to_user(
        &self,
        username: &str,
    ) -> Result<Vec<FriendRequestEntity>, error::SystemError> {
        let rows = sqlx::query_as::<_, FriendRequestEntity>(
            "SELECT * FROM friend_requests WHERE other = ?1 ORDER BY rowid",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_friend_requests_from_user(
        &self,
        username: &str,
    ) -> Result<Vec<FriendRequestEntity>, error::SystemError> {
        let rows = sqlx::query_as::<_, FriendRequestEntity>(
            "SELECT * FROM friend_requests WHERE username = ?1 ORDER BY rowid",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn create_friend_request(
        &self,
        sender: &str,
        receiver: &str,
    ) -> Result<(), error::SystemError> {
        sqlx::query("INSERT INTO friend_requests (username, other, created_at) VALUES (?1, ?2, ?3)")
            .bind(sender)
            .bind(receiver)
            .bind(chrono::Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl FriendRepo for FriendRepositorySqlite {
    async fn accept_friend_request_atomic(
        &self,
        sender: &str,
        receiver: &str,
    ) -> Result<AcceptOutcome, error::SystemError> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM friend_requests WHERE username = ?1 AND other = ?2")
            .bind(sender)
            .bind(receiver)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            tx.rollback().await?;
            return Err(error::SystemError::not_found("Friend Request does not exist"));
        }

        let (user_a, user_b) = canonical_pair(sender, receiver);

        let existing = sqlx::query_as::<_, FriendEntity>(
            "SELECT username, friend FROM friends WHERE username = ?1 AND friend = ?2",
        )
        .bind(user_a)
        .bind(user_b)
        .fetch_optional(&mut *tx)
        .await?;

        if existing.is_some() {
            tx.commit().await?;
            return Ok(AcceptOutcome::AlreadyFriends);
        }

        sqlx::query("INSERT INTO friends (username, friend) VALUES (?1, ?2)")
            .bind(user_a)
            .bind(user_b)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(AcceptOutcome::Befriended)
    }
}
