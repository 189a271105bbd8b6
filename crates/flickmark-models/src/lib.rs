pub mod language;
pub mod media;
pub mod wishlist;

pub use language::{Direction, Language};
pub use media::{MediaType, UnknownMediaType};
pub use wishlist::{CatalogId, WishlistCandidate, WishlistItem};
