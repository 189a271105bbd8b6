pub mod locale;
pub mod messages;
pub mod storage;
pub mod wishlist;

pub use locale::{LocaleStore, SetLanguageOutcome, LANGUAGE_KEY};
pub use messages::MessageKey;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError, WriteStatus};
pub use wishlist::{AddOutcome, RemoveOutcome, WishlistStore, WISHLIST_KEY};
