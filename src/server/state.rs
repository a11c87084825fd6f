use axum::extract::FromRef;

use crate::anime_store::AnimeStore;
use std::sync::{Arc, Mutex};

use super::views::Views;
use super::ServerConfig;

pub type GuardedAnimeStore = Arc<Mutex<AnimeStore>>;
pub type SharedViews = Arc<Views>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub anime_store: GuardedAnimeStore,
    pub views: SharedViews,
}

impl ServerState {
    pub fn new(config: ServerConfig, anime_store: GuardedAnimeStore, views: Views) -> ServerState {
        ServerState {
            config,
            anime_store,
            views: Arc::new(views),
        }
    }
}

impl FromRef<ServerState> for GuardedAnimeStore {
    fn from_ref(input: &ServerState) -> Self {
        input.anime_store.clone()
    }
}

impl FromRef<ServerState> for SharedViews {
    fn from_ref(input: &ServerState) -> Self {
        input.views.clone()
    }
}
