use super::error::{AnimeStoreError, AnimeStoreResult};
use super::models::{Anime, AnimeCollection, AnimeEntry, AnimeFields, AnimeId};
use super::persistence::AnimePersistence;
use super::query::{AnimeLookup, AnimeMatch, AnimeQuery};
use super::title_case::title_case;
use tracing::{debug, info, warn};

/// Owns the in-memory catalog and writes it back after every change.
pub struct AnimeStore {
    collection: AnimeCollection,
    persistence: Box<dyn AnimePersistence>,
}

impl AnimeStore {
    pub fn load(persistence: Box<dyn AnimePersistence>) -> AnimeStoreResult<AnimeStore> {
        let collection = persistence.load()?;
        info!("Loaded {} anime entries", collection.len());
        Ok(AnimeStore {
            collection,
            persistence,
        })
    }

    pub fn collection(&self) -> &AnimeCollection {
        &self.collection
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn lookup(&self, query: &AnimeQuery) -> AnimeLookup {
        match query {
            AnimeQuery::All => AnimeLookup::All(self.collection.entries().to_vec()),
            AnimeQuery::ById(id) => AnimeLookup::Single(AnimeMatch {
                query: id.clone(),
                entry: self.get(id),
            }),
            AnimeQuery::ByTitle(title) => AnimeLookup::Single(AnimeMatch {
                query: title.clone(),
                entry: self
                    .collection
                    .find_by_title(&title_case(title))
                    .cloned(),
            }),
        }
    }

    pub fn get(&self, id: &str) -> Option<AnimeEntry> {
        self.collection.get(id).map(|anime| AnimeEntry {
            id: id.to_string(),
            anime: anime.clone(),
        })
    }

    /// Adds a new anime under id `len + 1`.
    ///
    /// Ids are not reused from a counter, so after a delete the new id can be
    /// one that is still taken; in that case the existing entry is replaced.
    pub fn insert(&mut self, fields: &AnimeFields) -> AnimeStoreResult<AnimeId> {
        let id = (self.collection.len() + 1).to_string();
        let anime = fields.normalized();

        if let Some(replaced) = self.collection.insert(id.clone(), anime) {
            warn!(
                "Id {} was already taken by \"{}\", entry replaced",
                id, replaced.title
            );
        }
        self.persist()?;

        info!("Added anime {}", id);
        Ok(id)
    }

    pub fn update(&mut self, id: &str, fields: &AnimeFields) -> AnimeStoreResult<Anime> {
        let anime = self
            .collection
            .get_mut(id)
            .ok_or_else(|| AnimeStoreError::NotFound(id.to_string()))?;
        *anime = fields.normalized();
        let updated = anime.clone();
        self.persist()?;

        info!("Updated anime {}", id);
        Ok(updated)
    }

    /// Removes the anime at `id`. Deleting a missing id is not an error.
    pub fn delete(&mut self, id: &str) -> AnimeStoreResult<Option<Anime>> {
        let removed = self.collection.remove(id);
        match &removed {
            Some(anime) => info!("Deleted anime {} ({})", id, anime.title),
            None => debug!("Nothing to delete at id {}", id),
        }
        self.persist()?;
        Ok(removed)
    }

    fn persist(&self) -> AnimeStoreResult<()> {
        self.persistence.save(&self.collection)
    }
}
