use serde::Serialize;
use sqlx::prelude::FromRow;

/// Stored with `username < friend`; either user may appear in either column.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FriendEntity {
    pub username: String,
    pub friend: String,
}

/// Pending request from `username` to `other`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FriendRequestEntity {
    pub username: String,
    pub other: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
