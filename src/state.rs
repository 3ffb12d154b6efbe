use std::sync::Arc;

use sqlx::SqlitePool;

use crate::modules::{
    friend::{handle::FriendSvc, repository_sqlite::FriendRepositorySqlite, service::FriendService},
    group::{handle::GroupSvc, repository_sqlite::GroupRepositorySqlite, service::GroupService},
    restaurant::{
        handle::RestaurantSvc, repository_sqlite::RestaurantRepositorySqlite,
        service::RestaurantService, source::PlacesSource,
    },
    user::{repository_sqlite::UserRepositorySqlite, service::UserService},
};

/// Every service, wired over one store handle.
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub friend_service: FriendSvc,
    pub group_service: GroupSvc,
    pub restaurant_service: RestaurantSvc,
}

impl AppState {
    pub fn from_pool(pool: SqlitePool, source: Arc<dyn PlacesSource + Send + Sync>) -> Self {
        let user_repo = Arc::new(UserRepositorySqlite::new(pool.clone()));
        let friend_repo = Arc::new(FriendRepositorySqlite::new(pool.clone()));
        let group_repo = Arc::new(GroupRepositorySqlite::new(pool.clone()));
        let restaurant_repo = Arc::new(RestaurantRepositorySqlite::new(pool));

        AppState {
            user_service: UserService::with_dependencies(user_repo.clone()),
            friend_service: FriendService::with_dependencies(friend_repo.clone(), user_repo),
            group_service: GroupService::with_dependencies(group_repo.clone(), friend_repo),
            restaurant_service: RestaurantService::with_dependencies(
                restaurant_repo,
                group_repo,
                source,
            ),
        }
    }
}
