use crate::api::error;
use crate::modules::friend::model::AcceptOutcome;
use crate::modules::friend::schema::{FriendEntity, FriendRequestEntity};

#[async_trait::async_trait]
pub trait FriendRepository {
    /// Looks the pair up regardless of argument order.
    async fn find_friendship(
        &self,
        username_a: &str,
        username_b: &str,
    ) -> Result<Option<FriendEntity>, error::SystemError>;

    async fn find_friends(&self, username: &str) -> Result<Vec<String>, error::SystemError>;

    /// The subset of `candidates` that are confirmed friends of `username`,
    /// in friendship row order, fetched in one query.
    async fn find_friends_among(
        &self,
        username: &str,
        candidates: &[String],
    ) -> Result<Vec<String>, error::SystemError>;

    async fn delete_friendship(
        &self,
        username_a: &str,
        username_b: &str,
    ) -> Result<u64, error::SystemError>;
}

#[async_trait::async_trait]
pub trait FriendRequestRepository {
    async fn find_friend_request(
        &self,
        sender: &str,
        receiver: &str,
    ) -> Result<Option<FriendRequestEntity>, error::SystemError>;

    async fn find_friend_requests_to_user(
        &self,
        username: &str,
    ) -> Result<Vec<FriendRequestEntity>, error::SystemError>;

    async fn find_friend_requests_from_user(
        &self,
        username: &str,
    ) -> Result<Vec<FriendRequestEntity>, error::SystemError>;

    async fn create_friend_request(
        &self,
        sender: &str,
        receiver: &str,
    ) -> Result<(), error::SystemError>;
}

#[async_trait::async_trait]
pub trait FriendRepo: FriendRepository + FriendRequestRepository + Send + Sync {
    /// Consumes the pending request `sender -> receiver` and records the
    /// friendship unless one already exists, in a single transaction.
    async fn accept_friend_request_atomic(
        &self,
        sender: &str,
        receiver: &str,
    ) -> Result<AcceptOutcome, error::SystemError>;
}
