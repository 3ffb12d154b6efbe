use std::sync::Arc;

use crate::{
    api::error::SystemError,
    modules::{
        friend::{
            model::AcceptOutcome,
            repository::{FriendRepo, FriendRepository, FriendRequestRepository},
            repository_sqlite::FriendRepositorySqlite,
            schema::{FriendEntity, FriendRequestEntity},
            service::FriendService,
        },
        user::repository_sqlite::UserRepositorySqlite,
    },
    test::{befriend, count, create_user, message_of, test_state},
};

#[tokio::test]
async fn accepted_request_becomes_symmetric_friendship() {
    let (state, pool) = test_state().await;
    create_user(&state, "alice").await;
    create_user(&state, "bob").await;
    let friends = &state.friend_service;

    let request = friends.send_friend_request("alice", "bob").await.unwrap();
    assert_eq!((request.username.as_str(), request.other.as_str()), ("alice", "bob"));
    assert_eq!(friends.get_friend_requests("bob").await.unwrap(), vec!["alice"]);
    assert!(!friends.is_friend("alice", "bob").await.unwrap());

    let friend = friends.accept_friend_request("bob", "alice").await.unwrap();
    assert_eq!(friend.username, "alice");

    assert!(friends.is_friend("alice", "bob").await.unwrap());
    assert!(friends.is_friend("bob", "alice").await.unwrap());
    assert!(friends.get_friend_requests("bob").await.unwrap().is_empty());
    assert_eq!(count(&pool, "friends").await, 1);
    assert_eq!(count(&pool, "friend_requests").await, 0);
}

#[tokio::test]
async fn friendship_is_stored_once_in_canonical_order() {
    let (state, pool) = test_state().await;
    create_user(&state, "zoe").await;
    create_user(&state, "adam").await;

    befriend(&state.friend_service, "zoe", "adam").await;

    let (username, friend) =
        sqlx::query_as::<_, (String, String)>("SELECT username, friend FROM friends")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!((username.as_str(), friend.as_str()), ("adam", "zoe"));
    assert_eq!(state.friend_service.get_friends("zoe").await.unwrap(), vec!["adam"]);
    assert_eq!(state.friend_service.get_friends("adam").await.unwrap(), vec!["zoe"]);
}

#[tokio::test]
async fn request_needs_both_users() {
    let (state, _pool) = test_state().await;
    create_user(&state, "alice").await;
    let friends = &state.friend_service;

    let err = friends.send_friend_request("nobody", "alice").await.unwrap_err();
    assert!(matches!(err, SystemError::NotFound(_)));
    assert_eq!(message_of(err), "Requester Not Found");

    let err = friends.send_friend_request("alice", "nobody").await.unwrap_err();
    assert_eq!(message_of(err), "Username does not exist");

    let err = friends.send_friend_request("alice", "alice").await.unwrap_err();
    assert!(matches!(err, SystemError::Validation(_)));
}

#[tokio::test]
async fn request_rejected_while_pending_or_friends() {
    let (state, pool) = test_state().await;
    for name in ["alice", "bob", "carol"] {
        create_user(&state, name).await;
    }
    let friends = &state.friend_service;

    friends.send_friend_request("alice", "bob").await.unwrap();

    let err = friends.send_friend_request("alice", "bob").await.unwrap_err();
    assert!(matches!(err, SystemError::Conflict(_)));

    let err = friends.send_friend_request("bob", "alice").await.unwrap_err();
    assert!(matches!(err, SystemError::Conflict(_)));
    assert_eq!(message_of(err), "alice has already sent you a friend request");

    befriend(friends, "alice", "carol").await;
    let err = friends.send_friend_request("carol", "alice").await.unwrap_err();
    assert_eq!(message_of(err), "You are already Friends with that user");

    assert_eq!(count(&pool, "friend_requests").await, 1);
}

#[tokio::test]
async fn incoming_requests_keep_storage_order() {
    let (state, _pool) = test_state().await;
    for name in ["host", "zed", "amy", "mo"] {
        create_user(&state, name).await;
    }
    let friends = &state.friend_service;
    for sender in ["zed", "amy", "mo"] {
        friends.send_friend_request(sender, "host").await.unwrap();
    }

    assert_eq!(friends.get_friend_requests("host").await.unwrap(), vec!["zed", "amy", "mo"]);

    assert_eq!(friends.get_sent_friend_requests("amy").await.unwrap(), vec!["host"]);
}

#[tokio::test]
async fn accept_requires_pending_request() {
    let (state, _pool) = test_state().await;
    create_user(&state, "alice").await;
    create_user(&state, "bob").await;
    let friends = &state.friend_service;

    let err = friends.accept_friend_request("bob", "alice").await.unwrap_err();
    assert!(matches!(err, SystemError::NotFound(_)));
    assert_eq!(message_of(err), "Friend Request does not exist");

    // Only the receiver can accept.
    friends.send_friend_request("alice", "bob").await.unwrap();
    let err = friends.accept_friend_request("alice", "bob").await.unwrap_err();
    assert!(matches!(err, SystemError::NotFound(_)));
    assert!(!friends.is_friend("alice", "bob").await.unwrap());
}

#[tokio::test]
async fn accept_consumes_request_when_already_friends() {
    let (state, pool) = test_state().await;
    create_user(&state, "alice").await;
    create_user(&state, "bob").await;

    // A friendship that appeared while the request was pending.
    FriendRepositorySqlite::new(pool.clone()).create_friend_request("alice", "bob").await.unwrap();
    sqlx::query("INSERT INTO friends (username, friend) VALUES ('alice', 'bob')")
        .execute(&pool)
        .await
        .unwrap();

    let err = state.friend_service.accept_friend_request("bob", "alice").await.unwrap_err();
    assert!(matches!(err, SystemError::Conflict(_)));
    assert_eq!(count(&pool, "friend_requests").await, 0);
    assert_eq!(count(&pool, "friends").await, 1);
}

#[tokio::test]
async fn remove_friend_undoes_friendship() {
    let (state, pool) = test_state().await;
    create_user(&state, "alice").await;
    create_user(&state, "bob").await;
    let friends = &state.friend_service;
    befriend(friends, "alice", "bob").await;

    friends.remove_friend("bob", "alice").await.unwrap();

    assert!(!friends.is_friend("alice", "bob").await.unwrap());
    assert!(!friends.is_friend("bob", "alice").await.unwrap());
    assert_eq!(count(&pool, "friends").await, 0);

    let err = friends.remove_friend("alice", "bob").await.unwrap_err();
    assert!(matches!(err, SystemError::NotFound(_)));

    // Back to no relation: a fresh request is allowed again.
    friends.send_friend_request("bob", "alice").await.unwrap();
}

#[derive(Clone, Copy)]
enum Lost {
    Request,
    Acceptance,
    Removal,
}

/// Delegates to SQLite but reports one kind of write as done without doing it.
struct LossyFriendRepository {
    inner: FriendRepositorySqlite,
    lost: Lost,
}

#[async_trait::async_trait]
impl FriendRepository for LossyFriendRepository {
    async fn find_friendship(
        &self,
        username_a: &str,
        username_b: &str,
    ) -> Result<Option<FriendEntity>, SystemError> {
        self.inner.find_friendship(username_a, username_b).await
    }

    async fn find_friends(&self, username: &str) -> Result<Vec<String>, SystemError> {
        self.inner.find_friends(username).await
    }

    async fn find_friends_among(
        &self,
        username: &str,
        candidates: &[String],
    ) -> Result<Vec<String>, SystemError> {
        self.inner.find_friends_among(username, candidates).await
    }

    async fn delete_friendship(
        &self,
        username_a: &str,
        username_b: &str,
    ) -> Result<u64, SystemError> {
        match self.lost {
            Lost::Removal => Ok(1),
            _ => self.inner.delete_friendship(username_a, username_b).await,
        }
    }
}

#[async_trait::async_trait]
impl FriendRequestRepository for LossyFriendRepository {
    async fn find_friend_request(
        &self,
        sender: &str,
        receiver: &str,
    ) -> Result<Option<FriendRequestEntity>, SystemError> {
        self.inner.find_friend_request(sender, receiver).await
    }

    async fn find_friend_requests_to_user(
        &self,
        username: &str,
    ) -> Result<Vec<FriendRequestEntity>, SystemError> {
        self.inner.find_friend_requests_to_user(username).await
    }

    async fn find_friend_requests_from_user(
        &self,
        username: &str,
    ) -> Result<Vec<FriendRequestEntity>, SystemError> {
        self.inner.find_friend_requests_from_user(username).await
    }

    async fn create_friend_request(&self, sender: &str, receiver: &str) -> Result<(), SystemError> {
        match self.lost {
            Lost::Request => Ok(()),
            _ => self.inner.create_friend_request(sender, receiver).await,
        }
    }
}

#[async_trait::async_trait]
impl FriendRepo for LossyFriendRepository {
    async fn accept_friend_request_atomic(
        &self,
        sender: &str,
        receiver: &str,
    ) -> Result<AcceptOutcome, SystemError> {
        match self.lost {
            Lost::Acceptance => Ok(AcceptOutcome::Befriended),
            _ => self.inner.accept_friend_request_atomic(sender, receiver).await,
        }
    }
}

fn lossy_service(
    pool: &sqlx::SqlitePool,
    lost: Lost,
) -> FriendService<LossyFriendRepository, UserRepositorySqlite> {
    let inner = FriendRepositorySqlite::new(pool.clone());
    FriendService::with_dependencies(
        Arc::new(LossyFriendRepository { inner, lost }),
        Arc::new(UserRepositorySqlite::new(pool.clone())),
    )
}

#[tokio::test]
async fn lost_request_is_a_consistency_error() {
    let (state, pool) = test_state().await;
    create_user(&state, "alice").await;
    create_user(&state, "bob").await;

    let err = lossy_service(&pool, Lost::Request)
        .send_friend_request("alice", "bob")
        .await
        .unwrap_err();

    assert!(matches!(err, SystemError::Consistency(_)));
    assert_eq!(message_of(err), "Unknown Error Occurred");
}

#[tokio::test]
async fn lost_acceptance_is_a_consistency_error() {
    let (state, pool) = test_state().await;
    create_user(&state, "alice").await;
    create_user(&state, "bob").await;
    state.friend_service.send_friend_request("alice", "bob").await.unwrap();

    let err = lossy_service(&pool, Lost::Acceptance)
        .accept_friend_request("bob", "alice")
        .await
        .unwrap_err();

    assert!(matches!(err, SystemError::Consistency(_)));
    assert_eq!(message_of(err), "Unknown Error While Adding Friend");
    assert!(!state.friend_service.is_friend("alice", "bob").await.unwrap());
}

#[tokio::test]
async fn lost_removal_is_a_consistency_error() {
    let (state, pool) = test_state().await;
    create_user(&state, "alice").await;
    create_user(&state, "bob").await;
    befriend(&state.friend_service, "alice", "bob").await;

    let err = lossy_service(&pool, Lost::Removal).remove_friend("alice", "bob").await.unwrap_err();

    assert!(matches!(err, SystemError::Consistency(_)));
    assert_eq!(message_of(err), "Friend not removed");
    assert!(state.friend_service.is_friend("alice", "bob").await.unwrap());
}
