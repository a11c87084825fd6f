use super::models::{AnimeEntry, AnimeId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnimeQuery {
    All,
    ById(AnimeId),
    /// Matched exactly against stored titles after title case normalization.
    ByTitle(String),
}

impl AnimeQuery {
    /// Picks a query kind from a raw path segment: empty lists everything, a
    /// single character is an id and anything longer is a title. One-letter
    /// titles can't be looked up this way; use [`AnimeQuery::ByTitle`].
    pub fn infer(raw: &str) -> AnimeQuery {
        match raw.chars().count() {
            0 => AnimeQuery::All,
            1 => AnimeQuery::ById(raw.to_string()),
            _ => AnimeQuery::ByTitle(raw.to_string()),
        }
    }
}

/// Outcome of a single-record lookup. `entry` is `None` when nothing matched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimeMatch {
    pub query: String,
    pub entry: Option<AnimeEntry>,
}

impl AnimeMatch {
    pub fn is_found(&self) -> bool {
        self.entry.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnimeLookup {
    All(Vec<AnimeEntry>),
    Single(AnimeMatch),
}

impl AnimeLookup {
    /// Entries to display: the whole collection or the single match, if any.
    pub fn into_entries(self) -> Vec<AnimeEntry> {
        match self {
            AnimeLookup::All(entries) => entries,
            AnimeLookup::Single(found) => found.entry.into_iter().collect(),
        }
    }

    pub fn is_found(&self) -> bool {
        match self {
            AnimeLookup::All(_) => true,
            AnimeLookup::Single(found) => found.is_found(),
        }
    }
}
