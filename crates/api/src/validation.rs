//! Boundary validation of request bodies.
//!
//! One function per input shape, returning every violated rule so the
//! client sees the full list in a single 400, not one rule per round trip.
//! These run before the service is invoked; a non-empty result
//! short-circuits the request.

use crate::dto::{ArtistInput, ReviewInput};

/// Rules: `name` must not be blank.
pub fn validate_artist_input(input: &ArtistInput) -> Vec<String> {
    let mut violations = Vec::new();
    if input.name.trim().is_empty() {
        violations.push("name must not be blank".to_string());
    }
    violations
}

/// Rules: `rating` must be between 1 and 5, `comment` must not be blank.
pub fn validate_review_input(input: &ReviewInput) -> Vec<String> {
    let mut violations = Vec::new();
    if !(1..=5).contains(&input.rating) {
        violations.push("rating must be between 1 and 5".to_string());
    }
    if input.comment.trim().is_empty() {
        violations.push("comment must not be blank".to_string());
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artist(name: &str) -> ArtistInput {
        ArtistInput {
            name: name.to_string(),
            genre: None,
            biography: None,
        }
    }

    fn review(rating: i32, comment: &str) -> ReviewInput {
        ReviewInput {
            rating,
            comment: comment.to_string(),
        }
    }

    #[test]
    fn valid_artist_passes() {
        assert!(validate_artist_input(&artist("Miles")).is_empty());
    }

    #[test]
    fn blank_name_is_rejected() {
        assert_eq!(
            validate_artist_input(&artist("   ")),
            vec!["name must not be blank".to_string()]
        );
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(validate_review_input(&review(1, "ok")).is_empty());
        assert!(validate_review_input(&review(5, "ok")).is_empty());
        assert!(!validate_review_input(&review(0, "ok")).is_empty());
        assert!(!validate_review_input(&review(6, "ok")).is_empty());
    }

    #[test]
    fn blank_comment_is_rejected() {
        assert_eq!(
            validate_review_input(&review(3, "")),
            vec!["comment must not be blank".to_string()]
        );
    }

    #[test]
    fn all_violations_are_reported_together() {
        let violations = validate_review_input(&review(9, " "));
        assert_eq!(violations.len(), 2);
    }
}
