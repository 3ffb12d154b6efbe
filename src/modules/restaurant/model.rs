use serde::{Deserialize, Serialize};

use crate::api::error;

/// Nearby-search response as the places provider returns it. Results stay raw
/// so a malformed record only fails itself.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacesResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
    pub error_message: Option<String>,
}

impl PlacesResponse {
    pub fn into_results(self) -> Result<Vec<serde_json::Value>, error::SystemError> {
        if self.status != "OK" {
            if let Some(detail) = &self.error_message {
                log::warn!("Places provider answered {}: {}", self.status, detail);
            }
            return Err(error::SystemError::Provider(format!("Error {}", self.status).into()));
        }
        Ok(self.results)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceResult {
    pub name: String,
    pub geometry: Geometry,
    pub rating: f64,
    pub price_level: Option<i64>,
    #[serde(default)]
    pub photos: Vec<PlacePhoto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlacePhoto {
    pub photo_reference: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NearbySearch {
    pub lat: f64,
    pub lon: f64,
    pub radius: u32,
}

/// Two candidates with equal keys are the same restaurant, whichever group
/// ingested them.
#[derive(Debug, Clone, PartialEq)]
pub struct DedupKey {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub price_level: i64,
    pub rating: f64,
}

impl From<&PlaceResult> for DedupKey {
    fn from(place: &PlaceResult) -> Self {
        DedupKey {
            name: place.name.clone(),
            lat: place.geometry.location.lat,
            lon: place.geometry.location.lng,
            price_level: place.price_level.unwrap_or(0),
            rating: place.rating,
        }
    }
}

pub struct InsertRestaurant {
    pub key: DedupKey,
    pub photo_ref: String,
    pub group_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Inserted(i64),
    Duplicate,
    NoPhotos,
    Unconfirmed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub inserted: usize,
    pub duplicates: usize,
    pub skipped_no_photos: usize,
    pub unconfirmed: usize,
    pub failed: usize,
}

impl IngestReport {
    pub fn record(&mut self, outcome: &RecordOutcome) {
        match outcome {
            RecordOutcome::Inserted(_) => self.inserted += 1,
            RecordOutcome::Duplicate => self.duplicates += 1,
            RecordOutcome::NoPhotos => self.skipped_no_photos += 1,
            RecordOutcome::Unconfirmed => self.unconfirmed += 1,
        }
    }
}
