use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Review {
    pub id: Uuid,
    pub text: String,
    pub rating: u8,
    pub user_id: Uuid,
    pub place_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for POST /reviews. Rating is taken as a wide integer so out-of-range values reach validation.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct NewReview {
    pub text: String,
    pub rating: i64,
    pub user_id: String,
    pub place_id: String,
}

/// Payload for PUT /reviews/{id}. Author and place are fixed at creation.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct ReviewPatch {
    pub text: Option<String>,
    pub rating: Option<i64>,
}

impl Review {
    pub(crate) fn new(
        text: String,
        rating: u8,
        user_id: Uuid,
        place_id: Uuid,
        now: DateTime<Utc>,
    ) -> Self {
        Review {
            id: Uuid::new_v4(),
            text,
            rating,
            user_id,
            place_id,
            created_at: now,
            updated_at: now,
        }
    }
}
