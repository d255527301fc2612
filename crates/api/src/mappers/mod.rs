//! Pure entity ↔ DTO conversion, one module per resource.
//!
//! Mappers transform shapes and nothing else: no validation, no store
//! access.  Absent rows stay absent; a repository miss flows through
//! `Option::map` untouched, so no call site needs a presence guard.

pub mod artist;
pub mod review;
