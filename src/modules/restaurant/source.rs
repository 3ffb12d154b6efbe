use std::path::PathBuf;

use crate::{
    api::error,
    modules::restaurant::model::{NearbySearch, PlacesResponse},
};

/// Where nearby-restaurant data comes from.
#[async_trait::async_trait]
pub trait PlacesSource {
    async fn fetch_nearby(&self, search: &NearbySearch)
    -> Result<PlacesResponse, error::SystemError>;
}

/// Serves a recorded nearby-search response from disk, whatever the search.
#[derive(Clone)]
pub struct FixturePlacesSource {
    path: PathBuf,
}

impl FixturePlacesSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl PlacesSource for FixturePlacesSource {
    async fn fetch_nearby(
        &self,
        search: &NearbySearch,
    ) -> Result<PlacesResponse, error::SystemError> {
        log::debug!(
            "Reading nearby search ({}, {}) r={} from {}",
            search.lat,
            search.lon,
            search.radius,
            self.path.display()
        );
        let raw = tokio::fs::read(&self.path).await?;
        let response = serde_json::from_slice::<PlacesResponse>(&raw)?;
        Ok(response)
    }
}
