use serde::{Deserialize, Serialize};

use crate::modules::friend::schema::FriendRequestEntity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FriendResponse {
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendRequestResponse {
    pub from: String,
    pub to: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<FriendRequestEntity> for FriendRequestResponse {
    fn from(request: FriendRequestEntity) -> Self {
        FriendRequestResponse {
            from: request.username,
            to: request.other,
            created_at: request.created_at,
        }
    }
}

/// What accepting a pending request did inside its transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptOutcome {
    Befriended,
    /// The request was consumed but the pair were already friends.
    AlreadyFriends,
}
