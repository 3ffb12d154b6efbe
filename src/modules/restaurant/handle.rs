use crate::{
    api::{error, success},
    modules::{
        group::repository_sqlite::GroupRepositorySqlite,
        restaurant::{
            model::IngestReport, repository_sqlite::RestaurantRepositorySqlite,
            schema::RestaurantEntity, service::RestaurantService,
        },
    },
};

pub type RestaurantSvc = RestaurantService<RestaurantRepositorySqlite, GroupRepositorySqlite>;

pub async fn ingest_restaurants(
    restaurant_service: &RestaurantSvc,
    group_id: i64,
    radius: u32,
) -> Result<success::Success<IngestReport>, error::Error> {
    let report = restaurant_service.ingest_for_group(group_id, radius).await?;
    let message = format!("{} Restaurant(s) Added", report.inserted);
    Ok(success::Success::ok(Some(report)).message(message))
}

pub async fn list_restaurants(
    restaurant_service: &RestaurantSvc,
    group_id: i64,
) -> Result<success::Success<Vec<RestaurantEntity>>, error::Error> {
    let restaurants = restaurant_service.get_restaurants(group_id).await?;
    Ok(success::Success::ok(Some(restaurants)).message("Restaurants retrieved successfully"))
}
