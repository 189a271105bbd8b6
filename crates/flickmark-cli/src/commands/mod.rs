use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use flickmark_catalog::{ListingItem, TmdbClient};
use flickmark_config::{Config, PathManager};
use flickmark_models::MediaType;
use flickmark_store::{FileStorage, LocaleStore, WishlistStore};
use serde_json::json;

pub mod browse;
pub mod lang;
pub mod search;
pub mod show;
pub mod wishlist;

/// The two stores plus the resolved paths, constructed once per invocation.
/// Two concurrent invocations against the same data directory are
/// last-writer-wins.
pub struct AppContext {
    pub paths: PathManager,
    pub locale: LocaleStore<FileStorage>,
    pub wishlist: WishlistStore<FileStorage>,
}

pub fn open_context() -> Result<AppContext> {
    let paths = PathManager::default();
    paths
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create application directories: {}", e))?;

    tracing::debug!(data_dir = %paths.data_dir().display(), "Opening stores");
    let locale = LocaleStore::open(FileStorage::new(paths.data_dir()));
    let wishlist = WishlistStore::open(FileStorage::new(paths.data_dir()));
    Ok(AppContext {
        paths,
        locale,
        wishlist,
    })
}

pub fn open_catalog(paths: &PathManager) -> Result<TmdbClient> {
    let config = Config::load(&paths.config_file())
        .map_err(|e| eyre!("Failed to load config from {}: {}", paths.config_file().display(), e))?;

    let api_key = config.api_key().ok_or_else(|| {
        eyre!(
            "No TMDB API key configured. Set `api_key` under [tmdb] in {} or export TMDB_API_KEY",
            paths.config_file().display()
        )
    })?;

    Ok(TmdbClient::with_base_url(config.tmdb.base_url, api_key))
}

/// Render listing results as a table, marking entries already wishlisted.
pub fn listing_table(ctx: &AppContext, items: &[ListingItem], media_type: MediaType) -> Table {
    let unknown_date = ctx.locale.translate("unknownDate");

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["", "Id", "Title", "Date", "Rating"]);
    for item in items {
        let marker = if ctx
            .wishlist
            .contains(&item.id.to_string(), Some(media_type))
        {
            "★"
        } else {
            ""
        };
        table.add_row(vec![
            marker.to_string(),
            item.id.to_string(),
            item.display_title().to_string(),
            item.date().unwrap_or(unknown_date).to_string(),
            format!("{:.1}", item.vote_average),
        ]);
    }
    table
}

/// The same listing as machine-readable JSON.
pub fn listing_json(ctx: &AppContext, items: &[ListingItem], media_type: MediaType) -> serde_json::Value {
    let entries: Vec<serde_json::Value> = items
        .iter()
        .map(|item| {
            json!({
                "id": item.id,
                "type": media_type.as_str(),
                "title": item.display_title(),
                "date": item.date(),
                "rating": item.vote_average,
                "posterUrl": item.poster_url(),
                "wishlisted": ctx.wishlist.contains(&item.id.to_string(), Some(media_type)),
            })
        })
        .collect();
    json!(entries)
}
