use log::info;
use std::sync::Arc;

use crate::{
    api::error,
    modules::{
        friend::{
            model::{AcceptOutcome, FriendResponse},
            repository::FriendRepo,
            schema::{FriendEntity, FriendRequestEntity},
        },
        user::repository::UserRepository,
    },
};

#[derive(Clone)]
pub struct FriendService<R, U>
where
    R: FriendRepo + Send + Sync,
    U: UserRepository + Send + Sync,
{
    friend_repo: Arc<R>,
    user_repo: Arc<U>,
}

impl<R, U> FriendService<R, U>
where
    R: FriendRepo + Send + Sync,
    U: UserRepository + Send + Sync,
{
    pub fn with_dependencies(friend_repo: Arc<R>, user_repo: Arc<U>) -> Self {
        FriendService { friend_repo, user_repo }
    }

    pub async fn is_friend(&self, username: &str, other: &str) -> Result<bool, error::SystemError> {
        let friendship = self.friend_repo.find_friendship(username, other).await?;
        Ok(friendship.is_some())
    }

    pub async fn get_friends(&self, username: &str) -> Result<Vec<String>, error::SystemError> {
        self.friend_repo.find_friends(username).await
    }

    pub async fn send_friend_request(
        &self,
        sender: &str,
        receiver: &str,
    ) -> Result<FriendRequestEntity, error::SystemError> {
        if sender == receiver {
            return Err(error::SystemError::validation("Cannot send friend request to yourself"));
        }

        let users = self.user_repo.find_by_usernames(&[sender, receiver]).await?;
        if !users.iter().any(|u| u.username == sender) {
            return Err(error::SystemError::not_found("Requester Not Found"));
        }
        if !users.iter().any(|u| u.username == receiver) {
            return Err(error::SystemError::not_found("Username does not exist"));
        }

        let (friends, sent, received): (
            Option<FriendEntity>,
            Option<FriendRequestEntity>,
            Option<FriendRequestEntity>,
        ) = tokio::try_join!(
            self.friend_repo.find_friendship(sender, receiver),
            self.friend_repo.find_friend_request(sender, receiver),
            self.friend_repo.find_friend_request(receiver, sender),
        )?;

        if friends.is_some() {
            return Err(error::SystemError::conflict("You are already Friends with that user"));
        }
        if sent.is_some() {
            return Err(error::SystemError::conflict("Friend request already sent"));
        }
        if received.is_some() {
            return Err(error::SystemError::conflict(format!(
                "{receiver} has already sent you a friend request"
            )));
        }

        self.friend_repo.create_friend_request(sender, receiver).await?;

        let request = self
            .friend_repo
            .find_friend_request(sender, receiver)
            .await?
            .ok_or_else(|| error::SystemError::consistency("Unknown Error Occurred"))?;

        info!("Friend request {sender} -> {receiver} sent");
        Ok(request)
    }

    /// Usernames with a pending request addressed to `username`, oldest first.
    pub async fn get_friend_requests(
        &self,
        username: &str,
    ) -> Result<Vec<String>, error::SystemError> {
        let requests = self.friend_repo.find_friend_requests_to_user(username).await?;
        Ok(requests.into_iter().map(|r| r.username).collect())
    }

    /// Usernames `username` is still waiting on, oldest first.
    pub async fn get_sent_friend_requests(
        &self,
        username: &str,
    ) -> Result<Vec<String>, error::SystemError> {
        let requests = self.friend_repo.find_friend_requests_from_user(username).await?;
        Ok(requests.into_iter().map(|r| r.other).collect())
    }

    /// `username` accepts the request `sender` sent them.
    pub async fn accept_friend_request(
        &self,
        username: &str,
        sender: &str,
    ) -> Result<FriendResponse, error::SystemError> {
        match self.friend_repo.accept_friend_request_atomic(sender, username).await? {
            AcceptOutcome::AlreadyFriends => {
                return Err(error::SystemError::conflict("You are already Friends with that user"));
            }
            AcceptOutcome::Befriended => {}
        }

        if self.friend_repo.find_friendship(username, sender).await?.is_none() {
            return Err(error::SystemError::consistency("Unknown Error While Adding Friend"));
        }

        info!("{username} and {sender} are now friends");
        Ok(FriendResponse { username: sender.to_string() })
    }

    pub async fn remove_friend(&self, username: &str, other: &str) -> Result<(), error::SystemError> {
        if self.friend_repo.find_friendship(username, other).await?.is_none() {
            return Err(error::SystemError::not_found("You are not friends with that user!"));
        }

        self.friend_repo.delete_friendship(username, other).await?;

        if self.friend_repo.find_friendship(username, other).await?.is_some() {
            return Err(error::SystemError::consistency("Friend not removed"));
        }

        info!("{username} and {other} are no longer friends");
        Ok(())
    }
}
