use log::{debug, error, info, warn};
use std::sync::Arc;

use crate::{
    api::error,
    modules::{
        group::repository::GroupRepository,
        restaurant::{
            model::{
                DedupKey, IngestReport, InsertRestaurant, NearbySearch, PlaceResult, RecordOutcome,
            },
            repository::RestaurantRepository,
            schema::RestaurantEntity,
            source::PlacesSource,
        },
    },
};

#[derive(Clone)]
pub struct RestaurantService<S, G>
where
    S: RestaurantRepository,
    G: GroupRepository,
{
    restaurant_repo: Arc<S>,
    group_repo: Arc<G>,
    source: Arc<dyn PlacesSource + Send + Sync>,
}

impl<S, G> RestaurantService<S, G>
where
    S: RestaurantRepository,
    G: GroupRepository,
{
    pub fn with_dependencies(
        restaurant_repo: Arc<S>,
        group_repo: Arc<G>,
        source: Arc<dyn PlacesSource + Send + Sync>,
    ) -> Self {
        RestaurantService { restaurant_repo, group_repo, source }
    }

    /// Searches around the group's own anchor.
    pub async fn ingest_for_group(
        &self,
        group_id: i64,
        radius: u32,
    ) -> Result<IngestReport, error::SystemError> {
        let group = self
            .group_repo
            .find_by_id(group_id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("Group not found"))?;

        let search = NearbySearch { lat: group.latitude, lon: group.longitude, radius };
        self.ingest_nearby(group_id, &search).await
    }

    pub async fn ingest_nearby(
        &self,
        group_id: i64,
        search: &NearbySearch,
    ) -> Result<IngestReport, error::SystemError> {
        let response = self.source.fetch_nearby(search).await?;
        let results = response.into_results()?;
        self.ingest_candidates(group_id, results).await
    }

    /// Stores every usable, not yet known candidate for `group_id`. Records are
    /// handled one by one; a bad record is logged and counted, never retried,
    /// and never stops the rest of the batch.
    pub async fn ingest_candidates(
        &self,
        group_id: i64,
        results: Vec<serde_json::Value>,
    ) -> Result<IngestReport, error::SystemError> {
        if self.group_repo.find_by_id(group_id).await?.is_none() {
            return Err(error::SystemError::not_found("Group not found"));
        }

        let mut report = IngestReport::default();
        for record in results {
            match self.ingest_record(group_id, record).await {
                Ok(outcome) => report.record(&outcome),
                Err(e) => {
                    error!("Error: {e}");
                    report.failed += 1;
                }
            }
        }

        info!(
            "Group {group_id}: {} restaurant(s) added, {} already known, {} without photos, {} failed",
            report.inserted, report.duplicates, report.skipped_no_photos, report.failed
        );
        Ok(report)
    }

    async fn ingest_record(
        &self,
        group_id: i64,
        record: serde_json::Value,
    ) -> Result<RecordOutcome, error::SystemError> {
        let has_photo = record
            .get("photos")
            .and_then(serde_json::Value::as_array)
            .is_some_and(|photos| !photos.is_empty());
        if !has_photo {
            let name = record.get("name").and_then(serde_json::Value::as_str).unwrap_or_default();
            info!("Restaurant {name} has no photos, skipping");
            return Ok(RecordOutcome::NoPhotos);
        }

        let place = serde_json::from_value::<PlaceResult>(record)?;
        let Some(photo) = place.photos.first() else {
            return Ok(RecordOutcome::NoPhotos);
        };

        let key = DedupKey::from(&place);
        if self.restaurant_repo.find_id_by_key(&key).await?.is_some() {
            debug!("Restaurant {} already stored, skipping", place.name);
            return Ok(RecordOutcome::Duplicate);
        }

        let restaurant =
            InsertRestaurant { key, photo_ref: photo.photo_reference.clone(), group_id };
        self.restaurant_repo.create(&restaurant).await?;

        match self.restaurant_repo.find_id_by_key(&restaurant.key).await? {
            Some(id) => {
                info!("{id:4} Restaurant {} Added", place.name);
                Ok(RecordOutcome::Inserted(id))
            }
            None => {
                warn!("Restaurant {} was not found after insert, skipping", place.name);
                Ok(RecordOutcome::Unconfirmed)
            }
        }
    }

    pub async fn get_restaurants(
        &self,
        group_id: i64,
    ) -> Result<Vec<RestaurantEntity>, error::SystemError> {
        self.restaurant_repo.find_by_group(group_id).await
    }
}
