// Route exports
pub mod recommend;
pub mod sessions;

use actix_web::web;
use std::sync::Arc;

use crate::core::Matcher;
use crate::services::{BookmarkStore, CatalogProvider};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogProvider>,
    pub matcher: Matcher,
    pub bookmarks: Arc<BookmarkStore>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(recommend::configure)
        .configure(sessions::configure);
}
