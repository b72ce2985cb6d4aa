//! HTTP handlers: decode the request, call the facade, map the result.

pub mod amenities;
pub mod places;
pub mod reviews;
pub mod users;

use crate::error::{AppError, FacadeError};
use crate::models::{parse_ref, EntityKind};
use uuid::Uuid;

/// Path ids that are not UUIDs cannot name a stored entity, so they are reported as not found.
pub(crate) fn parse_id(raw: &str, kind: EntityKind) -> Result<Uuid, AppError> {
    parse_ref(raw).ok_or_else(|| FacadeError::not_found(kind).into())
}
