use super::title_case::title_case;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub type AnimeId = String;

/// A single catalogued anime, as stored on disk.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Anime {
    pub title: String,
    pub genre: String,
    #[serde(rename = "releaseYear")]
    pub release_year: String,
    pub creator: String,
}

/// Raw user input for creating or editing an anime. Fields are taken as-is
/// and only become an [`Anime`] through [`AnimeFields::normalized`].
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AnimeFields {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default, rename = "releaseYear")]
    pub release_year: String,
    #[serde(default)]
    pub creator: String,
}

impl AnimeFields {
    pub fn normalized(&self) -> Anime {
        Anime {
            title: title_case(&self.title),
            genre: title_case(&self.genre),
            release_year: title_case(&self.release_year),
            creator: title_case(&self.creator),
        }
    }
}

impl From<&Anime> for AnimeFields {
    fn from(anime: &Anime) -> Self {
        AnimeFields {
            title: anime.title.clone(),
            genre: anime.genre.clone(),
            release_year: anime.release_year.clone(),
            creator: anime.creator.clone(),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct AnimeEntry {
    pub id: AnimeId,
    #[serde(flatten)]
    pub anime: Anime,
}

/// Id-to-anime mapping that keeps entries in the order they were loaded or
/// inserted. Serialized as a single JSON object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnimeCollection {
    entries: Vec<AnimeEntry>,
}

impl AnimeCollection {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Anime> {
        self.position(id).map(|i| &self.entries[i].anime)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Anime> {
        self.position(id).map(|i| &mut self.entries[i].anime)
    }

    /// Inserts `anime` at `id`. An existing entry keeps its position and has
    /// its value replaced, which is then returned.
    pub fn insert(&mut self, id: AnimeId, anime: Anime) -> Option<Anime> {
        match self.position(&id) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].anime, anime)),
            None => {
                self.entries.push(AnimeEntry { id, anime });
                None
            }
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Anime> {
        self.position(id).map(|i| self.entries.remove(i).anime)
    }

    pub fn find_by_title(&self, title: &str) -> Option<&AnimeEntry> {
        self.entries.iter().find(|entry| entry.anime.title == title)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnimeEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[AnimeEntry] {
        &self.entries
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }
}

impl FromIterator<(AnimeId, Anime)> for AnimeCollection {
    fn from_iter<T: IntoIterator<Item = (AnimeId, Anime)>>(iter: T) -> Self {
        let mut collection = AnimeCollection::default();
        for (id, anime) in iter {
            collection.insert(id, anime);
        }
        collection
    }
}

impl Serialize for AnimeCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.id, &entry.anime)?;
        }
        map.end()
    }
}

struct AnimeCollectionVisitor;

impl<'de> Visitor<'de> for AnimeCollectionVisitor {
    type Value = AnimeCollection;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of anime ids to anime records")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut collection = AnimeCollection::default();
        while let Some((id, anime)) = access.next_entry::<AnimeId, Anime>()? {
            collection.insert(id, anime);
        }
        Ok(collection)
    }
}

impl<'de> Deserialize<'de> for AnimeCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AnimeCollectionVisitor)
    }
}
