//! HTML views rendered with minijinja.
//!
//! Template sources live under `templates/` and are embedded at build time.
//! Every page extends `base.html`; the layout picked by a handler decides
//! what goes in the content block.

use crate::anime_store::{AnimeEntry, AnimeFields};
use minijinja::{context, Environment};
use serde::Serialize;

const BASE_TEMPLATE: &str = include_str!("../../templates/base.html");
const MAIN_LAYOUT: &str = include_str!("../../templates/layouts/main.html");
const NOT_FOUND_LAYOUT: &str = include_str!("../../templates/layouts/not_found.html");
const ADD_LAYOUT: &str = include_str!("../../templates/layouts/add.html");
const EDIT_LAYOUT: &str = include_str!("../../templates/layouts/edit.html");
const ANIME_CARD_PARTIAL: &str = include_str!("../../templates/partials/anime_card.html");
const ANIME_FORM_PARTIAL: &str = include_str!("../../templates/partials/anime_form.html");
const SEARCH_FORM_PARTIAL: &str = include_str!("../../templates/partials/search_form.html");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Main,
    NotFound,
    Add,
    Edit,
}

impl Layout {
    fn template_name(&self) -> &'static str {
        match self {
            Layout::Main => "layouts/main.html",
            Layout::NotFound => "layouts/not_found.html",
            Layout::Add => "layouts/add.html",
            Layout::Edit => "layouts/edit.html",
        }
    }
}

pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Views, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("base.html", BASE_TEMPLATE)?;
        env.add_template("partials/anime_card.html", ANIME_CARD_PARTIAL)?;
        env.add_template("partials/anime_form.html", ANIME_FORM_PARTIAL)?;
        env.add_template("partials/search_form.html", SEARCH_FORM_PARTIAL)?;
        env.add_template(Layout::Main.template_name(), MAIN_LAYOUT)?;
        env.add_template(Layout::NotFound.template_name(), NOT_FOUND_LAYOUT)?;
        env.add_template(Layout::Add.template_name(), ADD_LAYOUT)?;
        env.add_template(Layout::Edit.template_name(), EDIT_LAYOUT)?;
        Ok(Views { env })
    }

    pub fn render<S: Serialize>(&self, layout: Layout, ctx: S) -> Result<String, minijinja::Error> {
        self.env.get_template(layout.template_name())?.render(ctx)
    }

    /// `listing` is true when `entries` is the whole catalog rather than a
    /// single search or id match.
    pub fn main(&self, entries: &[AnimeEntry], listing: bool) -> Result<String, minijinja::Error> {
        self.render(Layout::Main, context! { entries, listing })
    }

    pub fn not_found(&self, query: Option<&str>) -> Result<String, minijinja::Error> {
        self.render(Layout::NotFound, context! { query })
    }

    pub fn add(&self) -> Result<String, minijinja::Error> {
        self.render(Layout::Add, context! { fields => AnimeFields::default() })
    }

    pub fn edit(&self, entry: &AnimeEntry) -> Result<String, minijinja::Error> {
        self.render(
            Layout::Edit,
            context! { id => entry.id.as_str(), fields => AnimeFields::from(&entry.anime) },
        )
    }
}
