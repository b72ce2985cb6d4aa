//! Field validation for entity records. Checks here need no store access; reference and
//! uniqueness checks live in the facade.

use crate::error::FacadeError;
use crate::models::{Amenity, Place, Review, User};
use regex::Regex;
use std::sync::LazyLock;

/// Length cap for user names and amenity names, in characters.
pub const MAX_NAME_CHARS: usize = 50;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
});

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

pub fn validate_user(user: &User) -> Result<(), FacadeError> {
    if is_blank(&user.first_name) || is_blank(&user.last_name) {
        return Err(FacadeError::invalid("First name and Last name are required"));
    }
    if char_len(&user.first_name) > MAX_NAME_CHARS || char_len(&user.last_name) > MAX_NAME_CHARS {
        return Err(FacadeError::invalid(
            "First name and Last name must not exceed 50 characters",
        ));
    }
    validate_email(&user.email)
}

pub fn validate_email(email: &str) -> Result<(), FacadeError> {
    if !EMAIL_RE.is_match(email) {
        return Err(FacadeError::invalid("Invalid email format"));
    }
    Ok(())
}

pub fn validate_amenity(amenity: &Amenity) -> Result<(), FacadeError> {
    if is_blank(&amenity.name) {
        return Err(FacadeError::invalid("Name is required"));
    }
    if char_len(&amenity.name) > MAX_NAME_CHARS {
        return Err(FacadeError::invalid("Name must not exceed 50 characters"));
    }
    Ok(())
}

pub fn validate_place(place: &Place) -> Result<(), FacadeError> {
    if is_blank(&place.title) {
        return Err(FacadeError::invalid("Title is required"));
    }
    if !place.price.is_finite() || place.price < 0.0 {
        return Err(FacadeError::invalid("Price must be a non-negative number"));
    }
    if !(-90.0..=90.0).contains(&place.latitude) {
        return Err(FacadeError::invalid("Latitude must be between -90 and 90"));
    }
    if !(-180.0..=180.0).contains(&place.longitude) {
        return Err(FacadeError::invalid("Longitude must be between -180 and 180"));
    }
    Ok(())
}

/// Check a client-supplied rating and narrow it to the stored width.
pub fn check_rating(rating: i64) -> Result<u8, FacadeError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(FacadeError::invalid("Rating must be between 1 and 5"));
    }
    u8::try_from(rating).map_err(|_| FacadeError::invalid("Rating must be between 1 and 5"))
}

pub fn validate_review(review: &Review) -> Result<(), FacadeError> {
    if is_blank(&review.text) {
        return Err(FacadeError::invalid("Text is required"));
    }
    check_rating(i64::from(review.rating))?;
    Ok(())
}
