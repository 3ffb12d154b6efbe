use serde::Serialize;
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RestaurantEntity {
    pub id: i64,
    pub name: String,
    pub photo_ref: String,
    pub lat: f64,
    pub lon: f64,
    pub price_level: i64,
    pub rating: f64,
    pub group_id: i64,
}
