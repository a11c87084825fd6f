//! Test fixture creation
//!
//! Builds a throwaway public directory holding the catalog JSON and a
//! stylesheet, mirroring the layout the server expects in production.

use super::constants::*;
use anyhow::Result;
use serde_json::json;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a temporary public directory with the fixture catalog.
///
/// Returns the directory guard (delete on drop) and the catalog file path.
pub fn create_test_public_dir() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;

    let catalog = json!({
        ANIME_1_ID: {
            "title": ANIME_1_TITLE,
            "genre": "Action",
            "releaseYear": "2002",
            "creator": ANIME_1_CREATOR,
        },
        ANIME_2_ID: {
            "title": ANIME_2_TITLE,
            "genre": "Space Western",
            "releaseYear": "1998",
            "creator": "Shinichiro Watanabe",
        },
        ANIME_3_ID: {
            "title": ANIME_3_TITLE,
            "genre": "Adventure",
            "releaseYear": "2003",
            "creator": "Hiromu Arakawa",
        },
    });

    let db_path = dir.path().join("animeDB.json");
    std::fs::write(&db_path, serde_json::to_string(&catalog)?)?;
    std::fs::write(dir.path().join("style.css"), STYLESHEET_CONTENT)?;

    Ok((dir, db_path))
}
