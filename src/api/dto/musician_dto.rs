//! Catalog DTOs for musician and genre listings.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{MusicianFilter, MusicianProfile};

/// One musician profile as returned by `GET /api/musicians`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MusicianDto {
    /// Display name.
    pub name: String,
    /// Avatar emoji.
    pub emoji: String,
    /// Genre label.
    pub genre: String,
    /// Active era.
    pub era: String,
    /// Birth year and place.
    pub born: String,
    /// Comma-separated instruments.
    pub instrument: String,
    /// One-line tagline.
    pub tagline: String,
    /// Biography paragraph.
    pub bio: String,
    /// Signature works.
    pub known_for: Vec<String>,
}

impl From<&MusicianProfile> for MusicianDto {
    fn from(p: &MusicianProfile) -> Self {
        Self {
            name: p.name.to_string(),
            emoji: p.emoji.to_string(),
            genre: p.genre.to_string(),
            era: p.era.to_string(),
            born: p.born.to_string(),
            instrument: p.instrument.to_string(),
            tagline: p.tagline.to_string(),
            bio: p.bio.to_string(),
            known_for: p.known_for.iter().map(|k| (*k).to_string()).collect(),
        }
    }
}

/// Response body for `GET /api/musicians`.
#[derive(Debug, Serialize, ToSchema)]
pub struct MusicianListResponse {
    /// Matching profiles in catalog order.
    pub musicians: Vec<MusicianDto>,
    /// Number of profiles returned.
    pub total: usize,
}

/// Optional filters for `GET /api/musicians`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MusicianQueryParams {
    /// Exact genre to keep (`All` disables the filter).
    pub genre: Option<String>,
    /// Case-insensitive text matched against name, genre and biography.
    pub q: Option<String>,
}

impl MusicianQueryParams {
    /// Converts the raw query into a domain filter.
    #[must_use]
    pub fn to_filter(&self) -> MusicianFilter {
        MusicianFilter::new(self.genre.as_deref(), self.q.as_deref())
    }
}

/// Response body for `GET /api/genres`.
#[derive(Debug, Serialize, ToSchema)]
pub struct GenreListResponse {
    /// Distinct genres in first-appearance order.
    pub genres: Vec<String>,
    /// Number of genres.
    pub total: usize,
}
