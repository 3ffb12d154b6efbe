use crate::{
    api::{error, success},
    modules::{
        friend::{
            model::{FriendRequestResponse, FriendResponse},
            repository_sqlite::FriendRepositorySqlite,
            service::FriendService,
        },
        user::repository_sqlite::UserRepositorySqlite,
    },
};

pub type FriendSvc = FriendService<FriendRepositorySqlite, UserRepositorySqlite>;

pub async fn send_friend_request(
    friend_service: &FriendSvc,
    sender: &str,
    receiver: &str,
) -> Result<success::Success<FriendRequestResponse>, error::Error> {
    let request = friend_service.send_friend_request(sender, receiver).await?;
    Ok(success::Success::created(Some(FriendRequestResponse::from(request)))
        .message("Friend Request Sent"))
}

pub async fn list_friend_requests(
    friend_service: &FriendSvc,
    username: &str,
) -> Result<success::Success<Vec<String>>, error::Error> {
    let requests = friend_service.get_friend_requests(username).await?;
    Ok(success::Success::ok(Some(requests)).message("Friend requests retrieved successfully"))
}

pub async fn list_sent_friend_requests(
    friend_service: &FriendSvc,
    username: &str,
) -> Result<success::Success<Vec<String>>, error::Error> {
    let requests = friend_service.get_sent_friend_requests(username).await?;
    Ok(success::Success::ok(Some(requests)).message("Sent friend requests retrieved successfully"))
}

pub async fn accept_friend_request(
    friend_service: &FriendSvc,
    username: &str,
    sender: &str,
) -> Result<success::Success<FriendResponse>, error::Error> {
    let friend = friend_service.accept_friend_request(username, sender).await?;
    let message = format!("You are now friends with {}", friend.username);
    Ok(success::Success::ok(Some(friend)).message(message))
}

pub async fn list_friends(
    friend_service: &FriendSvc,
    username: &str,
) -> Result<success::Success<Vec<String>>, error::Error> {
    let friends = friend_service.get_friends(username).await?;
    Ok(success::Success::ok(Some(friends)).message("Friends retrieved successfully"))
}

pub async fn remove_friend(
    friend_service: &FriendSvc,
    username: &str,
    other: &str,
) -> Result<success::Success<()>, error::Error> {
    friend_service.remove_friend(username, other).await?;
    Ok(success::Success::no_content().message("Friend Removed"))
}
