//! Entity structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models — they carry no behaviour beyond what the
//! rows themselves hold.  API-facing shapes live in the `api` crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// artists
// ---------------------------------------------------------------------------

/// A persisted artist row.
///
/// `id` is `None` only on the transient entity built from client input;
/// the store assigns it at first insert and it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Artist {
    pub id: Option<i64>,
    pub name: String,
    pub genre: Option<String>,
    /// Free-form text, bounded to 1000 characters by the column.
    pub biography: Option<String>,
}

// ---------------------------------------------------------------------------
// reviews
// ---------------------------------------------------------------------------

/// A persisted review row.
///
/// `created_at` is stamped once by the create path and excluded from every
/// update; like `id`, it is `None` only before first persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: Option<i64>,
    pub rating: i32,
    pub comment: String,
    pub created_at: Option<DateTime<Utc>>,
}
