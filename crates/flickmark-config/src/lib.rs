pub mod config;
pub mod paths;

pub use config::{Config, TmdbConfig};
pub use paths::PathManager;
