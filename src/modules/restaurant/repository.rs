use crate::api::error;
use crate::modules::restaurant::model::{DedupKey, InsertRestaurant};
use crate::modules::restaurant::schema::RestaurantEntity;

#[async_trait::async_trait]
pub trait RestaurantRepository: Send + Sync {
    async fn find_id_by_key(&self, key: &DedupKey) -> Result<Option<i64>, error::SystemError>;

    async fn create(&self, restaurant: &InsertRestaurant) -> Result<i64, error::SystemError>;

    async fn find_by_group(
        &self,
        group_id: i64,
    ) -> Result<Vec<RestaurantEntity>, error::SystemError>;
}
