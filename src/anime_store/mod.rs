mod error;
mod models;
mod persistence;
mod query;
mod store;
mod title_case;

pub use error::{AnimeStoreError, AnimeStoreResult};
pub use models::{Anime, AnimeCollection, AnimeEntry, AnimeFields, AnimeId};
pub use persistence::{AnimePersistence, InMemoryPersistence, JsonFilePersistence};
pub use query::{AnimeLookup, AnimeMatch, AnimeQuery};
pub use store::AnimeStore;
pub use title_case::title_case;
