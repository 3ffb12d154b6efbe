use crate::{
    api::error,
    modules::restaurant::{
        model::{DedupKey, InsertRestaurant},
        repository::RestaurantRepository,
        schema::RestaurantEntity,
    },
};

#[derive(Clone)]
pub struct RestaurantRepositorySqlite {
    pool: sqlx::SqlitePool,
}

impl RestaurantRepositorySqlite {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl RestaurantRepository for RestaurantRepositorySqlite {
    async fn find_id_by_key(&self, key: &DedupKey) -> Result<Option<i64>, error::SystemError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id
            FROM restaurants
            WHERE name = ?1 AND lat = ?2 AND lon = ?3 AND price_level = ?4 AND rating = ?5
            LIMIT 1
            "#,
        )
        .bind(&key.name)
        .bind(key.lat)
        .bind(key.lon)
        .bind(key.price_level)
        .bind(key.rating)
        .fetch_optional(&self.pool)
        .await?;

        Ok(id)
    }

    async fn create(&self, restaurant: &InsertRestaurant) -> Result<i64, error::SystemError> {
        let id = sqlx::query(
            r#"
            INSERT INTO restaurants (name, photo_ref, lat, lon, price_level, rating, group_id)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&restaurant.key.name)
        .bind(&restaurant.photo_ref)
        .bind(restaurant.key.lat)
        .bind(restaurant.key.lon)
        .bind(restaurant.key.price_level)
        .bind(restaurant.key.rating)
        .bind(restaurant.group_id)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    async fn find_by_group(
        &self,
        group_id: i64,
    ) -> Result<Vec<RestaurantEntity>, error::SystemError> {
        let restaurants = sqlx::query_as::<_, RestaurantEntity>(
            "SELECT * FROM restaurants WHERE group_id = ?1 ORDER BY id",
        )
        .bind(group_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(restaurants)
    }
}
