//! Resource services — one use case per method.
//!
//! A service orchestrates exactly one request: fetch-or-fail, map, persist,
//! map back.  Collaborators arrive at construction time; there is no
//! ambient registry.

pub mod artists;
pub mod reviews;

pub use artists::ArtistService;
pub use reviews::ReviewService;
