//! Entity records, create payloads and partial-update patches for the four entity kinds.

mod amenity;
mod place;
mod review;
mod user;

pub use amenity::{Amenity, AmenityPatch, NewAmenity};
pub use place::{NewPlace, Place, PlaceDetails, PlacePatch};
pub use review::{NewReview, Review, ReviewPatch};
pub use user::{NewUser, User, UserPatch};

use std::fmt;
use uuid::Uuid;

/// The kinds of entity held by the facade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Amenity,
    Place,
    Review,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::User => "User",
            EntityKind::Amenity => "Amenity",
            EntityKind::Place => "Place",
            EntityKind::Review => "Review",
        };
        f.write_str(name)
    }
}

/// Parse a reference as sent by clients. Anything that is not a UUID cannot name a stored entity.
pub fn parse_ref(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}
