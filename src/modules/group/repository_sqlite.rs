use crate::{
    api::error,
    modules::group::{model::InsertGroup, repository::GroupRepository, schema::GroupEntity},
};

#[derive(Clone)]
pub struct GroupRepositorySqlite {
    pool: sqlx::SqlitePool,
}

impl GroupRepositorySqlite {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl GroupRepository for GroupRepositorySqlite {
    async fn find_by_id(&self, group_id: i64) -> Result<Option<GroupEntity>, error::SystemError> {
        let group = sqlx::query_as::<_, GroupEntity>("SELECT * FROM groups WHERE id = ?1")
            .bind(group_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(group)
    }

    async fn find_members(&self, group_id: i64) -> Result<Vec<String>, error::SystemError> {
        let members = sqlx::query_scalar::<_, String>(
            "SELECT username FROM group_members WHERE group_id = ?1 ORDER BY rowid",
        )
        .bind(group_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(members)
    }

    async fn find_groups_by_member(
        &self,
        username: &str,
    ) -> Result<Vec<GroupEntity>, error::SystemError> {
        let groups = sqlx::query_as::<_, GroupEntity>(
            r#"
            SELECT g.*
            FROM groups g
            JOIN group_members m
                ON m.group_id = g.id
            WHERE m.username = ?1
            ORDER BY g.id
            "#,
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;
        Ok(groups)
    }

    async fn create_with_members(
        &self,
        group: &InsertGroup,
        members: &[String],
    ) -> Result<i64, error::SystemError> {
        let mut tx = self.pool.begin().await?;

        let group_id = sqlx::query(
            r#"
            INSERT INTO groups (name, admin, latitude, longitude, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&group.name)
        .bind(&group.admin)
        .bind(group.latitude)
        .bind(group.longitude)
        .bind(chrono::Utc::now())
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        for member in members {
            sqlx::query(
                "INSERT INTO group_members (group_id, username) VALUES (?1, ?2) ON CONFLICT DO NOTHING",
            )
            .bind(group_id)
            .bind(member)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(group_id)
    }

    async fn delete(&self, group_id: i64) -> Result<u64, error::SystemError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM group_members WHERE group_id = ?1")
            .bind(group_id)
            .execute(&mut *tx)
            .await?;

        let rows = sqlx::query("DELETE FROM groups WHERE id = ?1")
            .bind(group_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        Ok(rows)
    }
}
