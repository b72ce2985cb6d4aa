use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Amenity {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct NewAmenity {
    pub name: String,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct AmenityPatch {
    pub name: Option<String>,
}

impl Amenity {
    pub(crate) fn new(payload: NewAmenity, now: DateTime<Utc>) -> Self {
        Amenity {
            id: Uuid::new_v4(),
            name: payload.name,
            created_at: now,
            updated_at: now,
        }
    }

    pub(crate) fn apply(&mut self, patch: AmenityPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
    }
}
