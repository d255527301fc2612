//! Artist entity ↔ DTO conversion.

use db::models::Artist;

use crate::dto::{ArtistDto, ArtistInput};

/// Persisted artist → API shape.
pub fn to_dto(artist: Artist) -> ArtistDto {
    ArtistDto {
        id: artist.id,
        name: artist.name,
        genre: artist.genre,
        biography: artist.biography,
    }
}

/// Request body → transient entity.  The id is left unassigned; it is the
/// store's to hand out, never the client's.
pub fn to_entity(input: ArtistInput) -> Artist {
    Artist {
        id: None,
        name: input.name,
        genre: input.genre,
        biography: input.biography,
    }
}
