use super::{Amenity, Review, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A rentable place. Reviews are not stored here; they are looked up by `place_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Place {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: Uuid,
    pub amenity_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for POST /places. References are raw strings and resolved by the facade.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct NewPlace {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: String,
    #[serde(default)]
    pub amenity_ids: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct PlacePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub owner_id: Option<String>,
    pub amenity_ids: Option<Vec<String>>,
}

/// A place with its references resolved, as served by GET /places/{id}.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct PlaceDetails {
    #[serde(flatten)]
    pub place: Place,
    pub owner: User,
    pub amenities: Vec<Amenity>,
    pub reviews: Vec<Review>,
}

impl Place {
    /// Build a place from a payload whose references were already resolved.
    pub(crate) fn new(
        payload: NewPlace,
        owner_id: Uuid,
        amenity_ids: Vec<Uuid>,
        now: DateTime<Utc>,
    ) -> Self {
        Place {
            id: Uuid::new_v4(),
            title: payload.title,
            description: payload.description,
            price: payload.price,
            latitude: payload.latitude,
            longitude: payload.longitude,
            owner_id,
            amenity_ids,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the scalar fields of a patch. Reference fields are handled by the caller after resolution.
    pub(crate) fn apply(&mut self, patch: &PlacePatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(latitude) = patch.latitude {
            self.latitude = latitude;
        }
        if let Some(longitude) = patch.longitude {
            self.longitude = longitude;
        }
    }

    /// Append an amenity unless already linked. Returns whether the list changed.
    pub(crate) fn link_amenity(&mut self, amenity_id: Uuid) -> bool {
        if self.amenity_ids.contains(&amenity_id) {
            return false;
        }
        self.amenity_ids.push(amenity_id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Place {
        let payload = NewPlace {
            title: "Cabin".into(),
            description: String::new(),
            price: 80.0,
            latitude: 45.0,
            longitude: 6.0,
            owner_id: String::new(),
            amenity_ids: Vec::new(),
        };
        Place::new(payload, Uuid::new_v4(), Vec::new(), Utc::now())
    }

    #[test]
    fn apply_keeps_absent_fields() {
        let mut place = sample();
        place.apply(&PlacePatch {
            price: Some(120.0),
            ..PlacePatch::default()
        });
        assert_eq!(place.price, 120.0);
        assert_eq!(place.title, "Cabin");
        assert_eq!(place.latitude, 45.0);
    }

    #[test]
    fn link_amenity_is_idempotent() {
        let mut place = sample();
        let wifi = Uuid::new_v4();
        assert!(place.link_amenity(wifi));
        assert!(!place.link_amenity(wifi));
        assert_eq!(place.amenity_ids, vec![wifi]);
    }
}
