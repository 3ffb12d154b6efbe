use std::path::PathBuf;
use std::sync::Arc;

use sqlx::SqlitePool;

use crate::{
    api::error,
    configs::connect_with_url,
    modules::{
        friend::handle::FriendSvc,
        group::model::CreateGroupModel,
        restaurant::{
            model::{NearbySearch, PlacesResponse},
            source::{FixturePlacesSource, PlacesSource},
        },
        user::model::SignUpModel,
    },
    state::AppState,
};

mod friend;

pub const PASSWORD: &str = "Secret#123";

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/nearby_search.json")
}

pub async fn test_pool() -> SqlitePool {
    connect_with_url("sqlite::memory:", 1).await.expect("in-memory database")
}

pub async fn test_state() -> (AppState, SqlitePool) {
    let pool = test_pool().await;
    let state = AppState::from_pool(pool.clone(), Arc::new(FixturePlacesSource::new(fixture_path())));
    (state, pool)
}

pub fn message_of(err: error::SystemError) -> String {
    error::Error::from(err).message().into_owned()
}

pub async fn create_user(state: &AppState, username: &str) {
    state
        .user_service
        .sign_up(SignUpModel::new(
            username,
            PASSWORD,
            "First",
            "Last",
            format!("{username}@example.com"),
        ))
        .await
        .expect("user created");
}

pub async fn befriend(friends: &FriendSvc, a: &str, b: &str) {
    friends.send_friend_request(a, b).await.expect("request sent");
    friends.accept_friend_request(b, a).await.expect("request accepted");
}

pub fn group_at(invitees: &[&str], latitude: f64, longitude: f64) -> CreateGroupModel {
    CreateGroupModel {
        invitees: invitees.iter().map(|i| i.to_string()).collect(),
        latitude,
        longitude,
    }
}

pub async fn count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("count rows")
}

/// Answers every search with the same canned provider response.
pub struct StaticPlacesSource {
    response: serde_json::Value,
}

impl StaticPlacesSource {
    pub fn new(response: serde_json::Value) -> Self {
        Self { response }
    }
}

#[async_trait::async_trait]
impl PlacesSource for StaticPlacesSource {
    async fn fetch_nearby(
        &self,
        _search: &NearbySearch,
    ) -> Result<PlacesResponse, error::SystemError> {
        Ok(serde_json::from_value(self.response.clone())?)
    }
}
