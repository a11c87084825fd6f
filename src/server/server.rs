use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tracing::{error, info};

use crate::anime_store::{AnimeFields, AnimeQuery, AnimeStore, AnimeStoreError};
use tower_http::services::ServeDir;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use super::views::Views;
use super::{log_requests, state::*, ServerConfig};

#[derive(Deserialize, Debug)]
struct SearchBody {
    #[serde(default)]
    pub title: String,
}

fn html_response(status: StatusCode, rendered: Result<String, minijinja::Error>) -> Response {
    match rendered {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            error!("Error rendering view: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn not_found_response(views: &Views, query: Option<&str>) -> Response {
    html_response(StatusCode::NOT_FOUND, views.not_found(query))
}

fn store_error_response(views: &Views, err: AnimeStoreError) -> Response {
    match err {
        AnimeStoreError::NotFound(id) => not_found_response(views, Some(&id)),
        err => {
            error!("Error writing anime catalog: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// Renders the main layout for `query`, or the not-found layout with a 404
/// when nothing matches.
fn lookup_response(state: &ServerState, query: AnimeQuery) -> Response {
    let lookup = state.anime_store.lock().unwrap().lookup(&query);
    let listing = matches!(query, AnimeQuery::All);

    if !lookup.is_found() {
        let text = match &query {
            AnimeQuery::All => None,
            AnimeQuery::ById(text) | AnimeQuery::ByTitle(text) => Some(text.as_str()),
        };
        return not_found_response(&state.views, text);
    }

    let entries = lookup.into_entries();
    html_response(StatusCode::OK, state.views.main(&entries, listing))
}

async fn home(State(state): State<ServerState>) -> Response {
    lookup_response(&state, AnimeQuery::All)
}

async fn get_anime(State(state): State<ServerState>, Path(id): Path<String>) -> Response {
    lookup_response(&state, AnimeQuery::infer(&id))
}

async fn search_anime(
    State(state): State<ServerState>,
    Form(body): Form<SearchBody>,
) -> Response {
    if body.title.is_empty() {
        return not_found_response(&state.views, None);
    }
    lookup_response(&state, AnimeQuery::ByTitle(body.title))
}

async fn add_form(State(views): State<SharedViews>) -> Response {
    html_response(StatusCode::OK, views.add())
}

async fn add_anime(
    State(state): State<ServerState>,
    Form(fields): Form<AnimeFields>,
) -> Response {
    match state.anime_store.lock().unwrap().insert(&fields) {
        Ok(_) => Redirect::to("/").into_response(),
        Err(err) => store_error_response(&state.views, err),
    }
}

async fn edit_form(State(state): State<ServerState>, Path(id): Path<String>) -> Response {
    match state.anime_store.lock().unwrap().get(&id) {
        Some(entry) => html_response(StatusCode::OK, state.views.edit(&entry)),
        None => not_found_response(&state.views, Some(&id)),
    }
}

async fn edit_anime(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Form(fields): Form<AnimeFields>,
) -> Response {
    match state.anime_store.lock().unwrap().update(&id, &fields) {
        Ok(_) => Redirect::to("/").into_response(),
        Err(err) => store_error_response(&state.views, err),
    }
}

async fn delete_anime(State(state): State<ServerState>, Path(id): Path<String>) -> Response {
    match state.anime_store.lock().unwrap().delete(&id) {
        Ok(_) => Redirect::to("/").into_response(),
        Err(err) => store_error_response(&state.views, err),
    }
}

async fn fallback(State(views): State<SharedViews>) -> Response {
    not_found_response(&views, None)
}

pub fn make_app(config: ServerConfig, anime_store: GuardedAnimeStore) -> Result<Router> {
    let views = Views::new().context("Failed to load view templates")?;
    let static_files_service = ServeDir::new(&config.public_dir);
    let state = ServerState::new(config, anime_store, views);

    let app: Router = Router::new()
        .route("/", get(home))
        .route("/add", get(add_form).post(add_anime))
        .route("/edit/{id}", get(edit_form).post(edit_anime))
        .route("/delete/{id}", get(delete_anime))
        .route("/search", post(search_anime))
        .route("/{id}", get(get_anime))
        .fallback(fallback)
        .with_state(state.clone())
        .nest_service("/static", static_files_service)
        .layer(middleware::from_fn_with_state(state, log_requests));

    Ok(app)
}

pub async fn run_server(config: ServerConfig, anime_store: AnimeStore) -> Result<()> {
    let addr = SocketAddr::new(config.host, config.port);
    let app = make_app(config, Arc::new(Mutex::new(anime_store)))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server is running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Received Ctrl+C, shutting down");
            }
        })
        .await?;
    Ok(())
}
