// Service exports
pub mod bookmarks;
pub mod catalog;
pub mod remote;

pub use bookmarks::{BookmarkError, BookmarkStore};
pub use catalog::{CatalogError, CatalogProvider, StaticCatalog};
pub use remote::RemoteCatalog;
