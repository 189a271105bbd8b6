pub mod client;
pub mod error;
pub mod types;

pub use client::{TmdbClient, DEFAULT_BASE_URL};
pub use error::CatalogError;
pub use types::{DetailRecord, Genre, ListingItem, ListingPage, SpokenLanguage, IMAGE_BASE_URL};
