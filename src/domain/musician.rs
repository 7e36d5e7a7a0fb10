//! Musician profile record and catalog filtering criteria.

use serde::Serialize;

/// One immutable entry of the built-in musician catalog.
///
/// Profiles have no identifier beyond their position in the catalog and
/// are never mutated or persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MusicianProfile {
    /// Display name.
    pub name: &'static str,
    /// Single emoji used as an avatar.
    pub emoji: &'static str,
    /// Genre label, also the filter key.
    pub genre: &'static str,
    /// Active era label (e.g. `"1970s–90s"`).
    pub era: &'static str,
    /// Birth year and place.
    pub born: &'static str,
    /// Comma-separated instruments.
    pub instrument: &'static str,
    /// One-line tagline.
    pub tagline: &'static str,
    /// Biography paragraph.
    pub bio: &'static str,
    /// Signature works, in display order.
    pub known_for: &'static [&'static str],
}

/// Criteria for narrowing the catalog.
///
/// An empty filter matches every profile. The pseudo-genre `All` also
/// matches every genre.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MusicianFilter {
    genre: Option<String>,
    needle: Option<String>,
}

impl MusicianFilter {
    /// Genre value that disables genre filtering.
    pub const ALL_GENRES: &'static str = "All";

    /// Builds a filter from optional genre and free-text search terms.
    ///
    /// Blank values are ignored.
    #[must_use]
    pub fn new(genre: Option<&str>, search: Option<&str>) -> Self {
        let genre = genre
            .map(str::trim)
            .filter(|g| !g.is_empty() && *g != Self::ALL_GENRES)
            .map(str::to_string);
        let needle = search
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);
        Self { genre, needle }
    }

    /// Returns `true` if no criteria are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genre.is_none() && self.needle.is_none()
    }

    /// Exact genre match plus case-insensitive search over name, genre and
    /// biography.
    #[must_use]
    pub fn matches(&self, profile: &MusicianProfile) -> bool {
        if let Some(genre) = &self.genre
            && profile.genre != genre.as_str()
        {
            return false;
        }
        match &self.needle {
            None => true,
            Some(needle) => [profile.name, profile.genre, profile.bio]
                .iter()
                .any(|field| field.to_lowercase().contains(needle.as_str())),
        }
    }
}
