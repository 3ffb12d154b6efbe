use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::modules::group::schema::GroupEntity;

/// Fields in the order their rules are checked.
pub const CREATE_GROUP_FIELDS: [&str; 3] = ["invitees", "latitude", "longitude"];

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGroupModel {
    #[validate(length(min = 1, message = "You must add someone to create a group"))]
    pub invitees: Vec<String>,
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: f64,
}

pub struct InsertGroup {
    pub name: String,
    pub admin: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupResponse {
    pub id: i64,
    pub name: String,
    pub admin: String,
    pub latitude: f64,
    pub longitude: f64,
    pub members: Vec<String>,
}

impl GroupResponse {
    pub fn new(group: GroupEntity, members: Vec<String>) -> Self {
        GroupResponse {
            id: group.id,
            name: group.name,
            admin: group.admin,
            latitude: group.latitude,
            longitude: group.longitude,
            members,
        }
    }
}
