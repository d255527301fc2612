//! API-facing data shapes.
//!
//! Output DTOs mirror the persisted rows plus the server-assigned fields;
//! input DTOs carry only the client-settable fields, so ids and timestamps
//! structurally cannot arrive from a request body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// artists
// ---------------------------------------------------------------------------

/// Artist as exposed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistDto {
    pub id: Option<i64>,
    pub name: String,
    pub genre: Option<String>,
    pub biography: Option<String>,
}

/// Artist create/update request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistInput {
    pub name: String,
    pub genre: Option<String>,
    pub biography: Option<String>,
}

// ---------------------------------------------------------------------------
// reviews
// ---------------------------------------------------------------------------

/// Review as exposed by the API.  `createdAt` is set at creation time and
/// never accepted from a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: Option<i64>,
    pub rating: i32,
    pub comment: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Review create/update request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewInput {
    pub rating: i32,
    pub comment: String,
}
