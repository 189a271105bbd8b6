use color_eyre::Result;
use flickmark_catalog::ListingPage;
use flickmark_models::MediaType;

use crate::commands::{listing_json, listing_table, open_catalog, open_context, AppContext};
use crate::output::{Output, OutputFormat};

pub async fn run_movies(page: u32, output: &Output) -> Result<()> {
    let ctx = open_context()?;
    let catalog = open_catalog(&ctx.paths)?;
    let listing = catalog
        .now_playing(page, ctx.locale.language().code())
        .await?;

    let heading = ctx.locale.translate("nowPlaying").to_string();
    print_listing(&ctx, &heading, &listing, MediaType::Movie, output);
    Ok(())
}

pub async fn run_tv(page: u32, output: &Output) -> Result<()> {
    let ctx = open_context()?;
    let catalog = open_catalog(&ctx.paths)?;
    let listing = catalog
        .popular_tv(page, ctx.locale.language().code())
        .await?;

    let heading = ctx.locale.translate("popularTvShows").to_string();
    print_listing(&ctx, &heading, &listing, MediaType::Tv, output);
    Ok(())
}

fn print_listing(
    ctx: &AppContext,
    heading: &str,
    listing: &ListingPage,
    media_type: MediaType,
    output: &Output,
) {
    if listing.results.is_empty() {
        output.info(ctx.locale.translate("noResultsFound"));
        return;
    }

    match output.format() {
        OutputFormat::Human => {
            output.println(format!(
                "{} ({}/{})",
                heading, listing.page, listing.total_pages
            ));
            output.println(listing_table(ctx, &listing.results, media_type).to_string());
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::json!({
                "page": listing.page,
                "totalPages": listing.total_pages,
                "results": listing_json(ctx, &listing.results, media_type),
            }));
        }
    }
}
