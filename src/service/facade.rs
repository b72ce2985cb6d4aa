//! Facade over the four entity collections: validation, reference integrity and derived lookups.
//!
//! Operations that check references take locks in a fixed order: users, amenities, places, reviews.
//! Referenced collections are held for reading while the mutated one is held for writing, so a
//! reference cannot disappear between the check and the write.

use crate::error::FacadeError;
use crate::models::{
    parse_ref, Amenity, AmenityPatch, EntityKind, NewAmenity, NewPlace, NewReview, NewUser, Place,
    PlaceDetails, PlacePatch, Review, ReviewPatch, User, UserPatch,
};
use crate::service::validation::{
    check_rating, validate_amenity, validate_place, validate_review, validate_user,
};
use crate::store::{Collection, Entity, Repository};
use chrono::Utc;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct Facade {
    users: Collection<User>,
    amenities: Collection<Amenity>,
    places: Collection<Place>,
    reviews: Collection<Review>,
}

fn fetch<T: Entity>(repo: &Repository<T>, id: &Uuid) -> Result<T, FacadeError> {
    repo.get(id)
        .cloned()
        .ok_or_else(|| FacadeError::not_found(T::KIND))
}

fn ensure_email_available(
    users: &Repository<User>,
    email: &str,
    except: Option<Uuid>,
) -> Result<(), FacadeError> {
    let taken = users
        .iter()
        .any(|u| Some(u.id) != except && u.email.eq_ignore_ascii_case(email));
    if taken {
        return Err(FacadeError::invalid("Email already registered"));
    }
    Ok(())
}

fn resolve_owner(users: &Repository<User>, raw: &str) -> Result<Uuid, FacadeError> {
    parse_ref(raw)
        .filter(|id| users.contains(id))
        .ok_or_else(|| FacadeError::OwnerNotFound {
            owner_id: raw.to_string(),
        })
}

/// Resolve amenity references, dropping duplicates while keeping first-seen order.
fn resolve_amenities(amenities: &Repository<Amenity>, raw: &[String]) -> Result<Vec<Uuid>, FacadeError> {
    let mut out = Vec::with_capacity(raw.len());
    for r in raw {
        let id = parse_ref(r)
            .filter(|id| amenities.contains(id))
            .ok_or_else(|| FacadeError::invalid(format!("Amenity '{}' does not exist", r)))?;
        if !out.contains(&id) {
            out.push(id);
        }
    }
    Ok(out)
}

fn resolve_ref<T: Entity>(repo: &Repository<T>, raw: &str, field: &str) -> Result<Uuid, FacadeError> {
    parse_ref(raw).filter(|id| repo.contains(id)).ok_or_else(|| {
        FacadeError::invalid(format!(
            "{} does not reference an existing {}",
            field,
            T::KIND.to_string().to_lowercase()
        ))
    })
}

impl Facade {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- users ----

    pub fn create_user(&self, payload: NewUser) -> Result<User, FacadeError> {
        let mut users = self.users.write();
        let user = User::new(payload, Utc::now());
        validate_user(&user)?;
        ensure_email_available(&users, &user.email, None)?;
        users.upsert(user.clone());
        tracing::debug!(id = %user.id, "user created");
        Ok(user)
    }

    pub fn get_user(&self, id: Uuid) -> Result<User, FacadeError> {
        fetch(&self.users.read(), &id)
    }

    pub fn list_users(&self) -> Vec<User> {
        self.users.read().list()
    }

    pub fn update_user(&self, id: Uuid, patch: UserPatch) -> Result<User, FacadeError> {
        let mut users = self.users.write();
        let mut user = fetch(&users, &id)?;
        user.apply(patch);
        validate_user(&user)?;
        ensure_email_available(&users, &user.email, Some(id))?;
        user.updated_at = Utc::now();
        users.upsert(user.clone());
        tracing::debug!(id = %id, "user updated");
        Ok(user)
    }

    // ---- amenities ----

    pub fn create_amenity(&self, payload: NewAmenity) -> Result<Amenity, FacadeError> {
        let amenity = Amenity::new(payload, Utc::now());
        validate_amenity(&amenity)?;
        self.amenities.write().upsert(amenity.clone());
        tracing::debug!(id = %amenity.id, "amenity created");
        Ok(amenity)
    }

    pub fn get_amenity(&self, id: Uuid) -> Result<Amenity, FacadeError> {
        fetch(&self.amenities.read(), &id)
    }

    pub fn list_amenities(&self) -> Vec<Amenity> {
        self.amenities.read().list()
    }

    pub fn update_amenity(&self, id: Uuid, patch: AmenityPatch) -> Result<Amenity, FacadeError> {
        let mut amenities = self.amenities.write();
        let mut amenity = fetch(&amenities, &id)?;
        amenity.apply(patch);
        validate_amenity(&amenity)?;
        amenity.updated_at = Utc::now();
        amenities.upsert(amenity.clone());
        tracing::debug!(id = %id, "amenity updated");
        Ok(amenity)
    }

    // ---- places ----

    pub fn create_place(&self, payload: NewPlace) -> Result<Place, FacadeError> {
        let users = self.users.read();
        let amenities = self.amenities.read();
        let mut places = self.places.write();

        let owner_id = resolve_owner(&users, &payload.owner_id)?;
        let amenity_ids = resolve_amenities(&amenities, &payload.amenity_ids)?;
        let place = Place::new(payload, owner_id, amenity_ids, Utc::now());
        validate_place(&place)?;
        places.upsert(place.clone());
        tracing::debug!(id = %place.id, owner = %owner_id, "place created");
        Ok(place)
    }

    pub fn get_place(&self, id: Uuid) -> Result<Place, FacadeError> {
        fetch(&self.places.read(), &id)
    }

    pub fn list_places(&self) -> Vec<Place> {
        self.places.read().list()
    }

    pub fn update_place(&self, id: Uuid, patch: PlacePatch) -> Result<Place, FacadeError> {
        let users = self.users.read();
        let amenities = self.amenities.read();
        let mut places = self.places.write();

        let mut place = fetch(&places, &id)?;
        place.apply(&patch);
        if let Some(raw) = &patch.owner_id {
            place.owner_id = resolve_owner(&users, raw)?;
        }
        if let Some(raw) = &patch.amenity_ids {
            place.amenity_ids = resolve_amenities(&amenities, raw)?;
        }
        validate_place(&place)?;
        place.updated_at = Utc::now();
        places.upsert(place.clone());
        tracing::debug!(id = %id, "place updated");
        Ok(place)
    }

    pub fn owner_for_place(&self, place_id: Uuid) -> Result<User, FacadeError> {
        let users = self.users.read();
        let place = fetch(&self.places.read(), &place_id)?;
        users
            .get(&place.owner_id)
            .cloned()
            .ok_or_else(|| FacadeError::OwnerNotFound {
                owner_id: place.owner_id.to_string(),
            })
    }

    pub fn amenities_for_place(&self, place_id: Uuid) -> Result<Vec<Amenity>, FacadeError> {
        let amenities = self.amenities.read();
        let place = fetch(&self.places.read(), &place_id)?;
        Ok(place
            .amenity_ids
            .iter()
            .filter_map(|id| amenities.get(id).cloned())
            .collect())
    }

    pub fn add_amenity_to_place(&self, place_id: Uuid, amenity_id: Uuid) -> Result<Place, FacadeError> {
        let amenities = self.amenities.read();
        let mut places = self.places.write();

        let mut place = fetch(&places, &place_id)?;
        if !amenities.contains(&amenity_id) {
            return Err(FacadeError::not_found(EntityKind::Amenity));
        }
        if place.link_amenity(amenity_id) {
            place.updated_at = Utc::now();
            places.upsert(place.clone());
            tracing::debug!(place = %place_id, amenity = %amenity_id, "amenity linked");
        }
        Ok(place)
    }

    /// The place with owner, amenities and reviews resolved, read under one consistent set of locks.
    pub fn place_details(&self, place_id: Uuid) -> Result<PlaceDetails, FacadeError> {
        let users = self.users.read();
        let amenities = self.amenities.read();
        let places = self.places.read();
        let reviews = self.reviews.read();

        let place = fetch(&places, &place_id)?;
        let owner = users
            .get(&place.owner_id)
            .cloned()
            .ok_or_else(|| FacadeError::OwnerNotFound {
                owner_id: place.owner_id.to_string(),
            })?;
        let place_amenities = place
            .amenity_ids
            .iter()
            .filter_map(|id| amenities.get(id).cloned())
            .collect();
        let place_reviews = reviews
            .iter()
            .filter(|r| r.place_id == place_id)
            .cloned()
            .collect();
        Ok(PlaceDetails {
            place,
            owner,
            amenities: place_amenities,
            reviews: place_reviews,
        })
    }

    // ---- reviews ----

    pub fn create_review(&self, payload: NewReview) -> Result<Review, FacadeError> {
        let users = self.users.read();
        let places = self.places.read();
        let mut reviews = self.reviews.write();

        let rating = check_rating(payload.rating)?;
        let user_id = resolve_ref(&users, &payload.user_id, "user_id")?;
        let place_id = resolve_ref(&places, &payload.place_id, "place_id")?;
        let review = Review::new(payload.text, rating, user_id, place_id, Utc::now());
        validate_review(&review)?;
        reviews.upsert(review.clone());
        tracing::debug!(id = %review.id, place = %place_id, "review created");
        Ok(review)
    }

    pub fn get_review(&self, id: Uuid) -> Result<Review, FacadeError> {
        fetch(&self.reviews.read(), &id)
    }

    pub fn list_reviews(&self) -> Vec<Review> {
        self.reviews.read().list()
    }

    pub fn update_review(&self, id: Uuid, patch: ReviewPatch) -> Result<Review, FacadeError> {
        let mut reviews = self.reviews.write();
        let mut review = fetch(&reviews, &id)?;
        if let Some(text) = patch.text {
            review.text = text;
        }
        if let Some(rating) = patch.rating {
            review.rating = check_rating(rating)?;
        }
        validate_review(&review)?;
        review.updated_at = Utc::now();
        reviews.upsert(review.clone());
        tracing::debug!(id = %id, "review updated");
        Ok(review)
    }

    pub fn delete_review(&self, id: Uuid) -> Result<Review, FacadeError> {
        let removed = self
            .reviews
            .write()
            .remove(&id)
            .ok_or_else(|| FacadeError::not_found(EntityKind::Review))?;
        tracing::debug!(id = %id, "review deleted");
        Ok(removed)
    }

    pub fn reviews_for_place(&self, place_id: Uuid) -> Result<Vec<Review>, FacadeError> {
        let places = self.places.read();
        let reviews = self.reviews.read();
        if !places.contains(&place_id) {
            return Err(FacadeError::not_found(EntityKind::Place));
        }
        Ok(reviews
            .iter()
            .filter(|r| r.place_id == place_id)
            .cloned()
            .collect())
    }
}
