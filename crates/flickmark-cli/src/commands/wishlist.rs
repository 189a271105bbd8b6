use color_eyre::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use flickmark_models::MediaType;
use flickmark_store::{AddOutcome, RemoveOutcome, WriteStatus};
use serde_json::json;

use crate::commands::{open_catalog, open_context};
use crate::output::{Output, OutputFormat};

pub fn run_list(media_type: Option<MediaType>, output: &Output) -> Result<()> {
    let ctx = open_context()?;

    let entries: Vec<_> = ctx
        .wishlist
        .items()
        .iter()
        .filter(|item| media_type.map_or(true, |t| item.media_type == t))
        .collect();

    if entries.is_empty() {
        let message = match media_type {
            Some(MediaType::Movie) => ctx.locale.translate("noMoviesInWishlist"),
            Some(MediaType::Tv) => ctx.locale.translate("noTVShowsInWishlist"),
            None => ctx.locale.translate("wishlist"),
        };
        match media_type {
            Some(_) => output.info(message),
            None => output.info(format!("{}: 0", message)),
        }
        return Ok(());
    }

    match output.format() {
        OutputFormat::Human => {
            output.println(format!(
                "{}: {}",
                ctx.locale.translate("wishlist"),
                entries.len()
            ));

            let unknown_date = ctx.locale.translate("unknownDate");
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["Id", "Type", "Title", "Date", "Rating"]);
            for item in &entries {
                table.add_row(vec![
                    item.id.clone(),
                    item.media_type.to_string(),
                    item.title.clone(),
                    item.release_date
                        .clone()
                        .unwrap_or_else(|| unknown_date.to_string()),
                    format!("{:.1}", item.rating),
                ]);
            }
            output.println(table.to_string());
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "count": entries.len(),
                "items": entries,
            }));
        }
    }

    Ok(())
}

pub async fn run_add(media_type: MediaType, id: &str, output: &Output) -> Result<()> {
    let mut ctx = open_context()?;
    let catalog = open_catalog(&ctx.paths)?;

    let detail = catalog
        .details(media_type, id, ctx.locale.language().code())
        .await?;
    let title = detail.display_title().to_string();

    match ctx.wishlist.add(detail.to_candidate(media_type)) {
        AddOutcome::Added(WriteStatus::Persisted) => {
            output.success(format!("Added {} ({} {})", title, media_type, id));
        }
        AddOutcome::Added(WriteStatus::MemoryOnly(e)) => {
            output.warn(format!(
                "Added {} but could not persist the wishlist: {}",
                title, e
            ));
        }
        AddOutcome::AlreadyPresent => {
            output.info(format!("{} is already on the wishlist", title));
        }
        AddOutcome::Rejected => {
            output.error("Catalog entry is missing an id and cannot be wishlisted");
        }
    }

    Ok(())
}

pub fn run_remove(id: &str, media_type: Option<MediaType>, output: &Output) -> Result<()> {
    let mut ctx = open_context()?;

    match ctx.wishlist.remove(id, media_type) {
        RemoveOutcome::Removed { count, status } => {
            match status {
                WriteStatus::Persisted => {
                    output.success(format!("Removed {} entr{}", count, plural_y(count)));
                }
                WriteStatus::MemoryOnly(e) => {
                    output.warn(format!(
                        "Removed {} entr{} but could not persist the wishlist: {}",
                        count,
                        plural_y(count),
                        e
                    ));
                }
            }
        }
        RemoveOutcome::NotFound => {
            output.warn(format!("No wishlist entry with id {}", id));
        }
    }

    Ok(())
}

pub fn run_clear(output: &Output) -> Result<()> {
    let mut ctx = open_context()?;

    match ctx.wishlist.clear() {
        WriteStatus::Persisted => output.success("Wishlist cleared"),
        WriteStatus::MemoryOnly(e) => {
            output.warn(format!("Could not erase the persisted wishlist: {}", e));
        }
    }

    Ok(())
}

fn plural_y(count: usize) -> &'static str {
    if count == 1 {
        "y"
    } else {
        "ies"
    }
}
