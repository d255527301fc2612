//! Review entity ↔ DTO conversion.

use db::models::Review;

use crate::dto::{ReviewDto, ReviewInput};

/// Persisted review → API shape.
pub fn to_dto(review: Review) -> ReviewDto {
    ReviewDto {
        id: review.id,
        rating: review.rating,
        comment: review.comment,
        created_at: review.created_at,
    }
}

/// Request body → transient entity.  Id and creation timestamp are left
/// unassigned: the store hands out the id, the create path stamps the
/// timestamp.
pub fn to_entity(input: ReviewInput) -> Review {
    Review {
        id: None,
        rating: input.rating,
        comment: input.comment,
        created_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn to_dto_carries_the_creation_timestamp() {
        let stamped = Utc::now();
        let dto = to_dto(Review {
            id: Some(1),
            rating: 4,
            comment: "solid".to_string(),
            created_at: Some(stamped),
        });
        assert_eq!(dto.id, Some(1));
        assert_eq!(dto.rating, 4);
        assert_eq!(dto.comment, "solid");
        assert_eq!(dto.created_at, Some(stamped));
    }

    #[test]
    fn to_entity_never_assigns_id_or_timestamp() {
        let entity = to_entity(ReviewInput {
            rating: 5,
            comment: "great".to_string(),
        });
        assert_eq!(entity.id, None);
        assert_eq!(entity.created_at, None);
    }

    #[test]
    fn round_trip_preserves_shared_fields() {
        let input = ReviewInput {
            rating: 2,
            comment: "meh".to_string(),
        };
        let dto = to_dto(to_entity(input.clone()));
        assert_eq!(dto.rating, input.rating);
        assert_eq!(dto.comment, input.comment);
    }

    #[test]
    fn absent_rows_pass_through_unguarded() {
        let missing: Option<Review> = None;
        assert_eq!(missing.map(to_dto), None);
    }
}
