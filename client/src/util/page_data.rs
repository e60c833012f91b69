//! Reading the JSON blobs and data attributes the backend embeds in pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Server templates render `<script type="application/json" id="...">`
//! elements holding the page's initial data. The loaders here take a reader
//! function (element id to text) so the decoding rules can be tested without
//! a DOM; [`element_text`] is the browser reader.
//!
//! ERROR HANDLING
//! ==============
//! `evaluation-data` is required on a game page. Other blobs fall back to
//! defaults when missing. A malformed site config is logged and replaced by
//! the defaults rather than taking the page down.

#[cfg(test)]
#[path = "page_data_test.rs"]
mod page_data_test;

use ratings::config::SiteConfig;
use ratings::evaluation::{GameStructure, PageDataError, SessionData, UserRatings, parse_optional, parse_required};
use ratings::store::PageStore;

pub const EVALUATION_DATA: &str = "evaluation-data";
pub const SESSION_DATA: &str = "session-data";
pub const CONFIG_DATA: &str = "config-data";
pub const USER_RATINGS_DATA: &str = "user-ratings-data";
pub const GAME_STRUCTURE_DATA: &str = "game-structure-data";

/// Text content of the element with `id`.
pub fn element_text(id: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.text_content())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        None
    }
}

/// Site config from `config-data`, or the defaults when it is missing or
/// invalid.
pub fn load_config(raw: Option<&str>) -> SiteConfig {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(raw) {
        Ok(config) => config,
        Err(err) => {
            #[cfg(feature = "csr")]
            log::error!("{CONFIG_DATA}: {err}; using defaults");
            let _ = err;
            SiteConfig::default()
        }
    }
}

/// Build the game page store from the embedded blobs.
///
/// # Errors
///
/// Returns [`PageDataError`] when `evaluation-data` is missing or any
/// present blob is malformed.
pub fn load_game_page(read: impl Fn(&str) -> Option<String>) -> Result<PageStore, PageDataError> {
    let evaluation = parse_required(EVALUATION_DATA, read(EVALUATION_DATA).as_deref())?;
    let session: SessionData = parse_optional(SESSION_DATA, read(SESSION_DATA).as_deref())?;
    let ratings: UserRatings = parse_optional(USER_RATINGS_DATA, read(USER_RATINGS_DATA).as_deref())?;
    let config = load_config(read(CONFIG_DATA).as_deref());
    Ok(PageStore::new(config, session, evaluation, ratings))
}

/// Initial lists for the structure editor; empty on the "add game" page.
///
/// # Errors
///
/// Returns [`PageDataError::Malformed`] when the blob is present but invalid.
pub fn load_structure(read: impl Fn(&str) -> Option<String>) -> Result<GameStructure, PageDataError> {
    parse_optional(GAME_STRUCTURE_DATA, read(GAME_STRUCTURE_DATA).as_deref())
}

/// Game id and title from a mount element's `data-game-id` and
/// `data-game-title` attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRef {
    pub id: i64,
    pub title: String,
}

impl GameRef {
    #[must_use]
    pub fn from_attributes(id: Option<&str>, title: Option<&str>) -> Option<Self> {
        let id = id?.trim().parse().ok()?;
        Some(Self { id, title: title.unwrap_or_default().trim().to_owned() })
    }
}

/// Navigate the browser to `path`.
pub fn navigate(path: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(w) = web_sys::window() {
            let _ = w.location().set_href(path);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
    }
}
