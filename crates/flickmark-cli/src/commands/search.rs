use color_eyre::Result;
use flickmark_models::MediaType;

use crate::commands::{listing_json, listing_table, open_catalog, open_context};
use crate::output::{Output, OutputFormat};

pub async fn run_search(
    query: &str,
    media_type: MediaType,
    page: u32,
    output: &Output,
) -> Result<()> {
    let ctx = open_context()?;
    let catalog = open_catalog(&ctx.paths)?;
    let language = ctx.locale.language().code();

    let results = catalog.search(media_type, query, page, language).await?;

    if results.results.is_empty() {
        output.info(ctx.locale.translate("noResultsFound"));
        return Ok(());
    }

    match output.format() {
        OutputFormat::Human => {
            output.println(format!(
                "{} \"{}\": {} {} ({}/{})",
                ctx.locale.translate("searchingFor"),
                query,
                results.total_results,
                ctx.locale.translate("resultsFound"),
                results.page,
                results.total_pages
            ));
            output.println(listing_table(&ctx, &results.results, media_type).to_string());
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::json!({
                "query": query,
                "page": results.page,
                "totalPages": results.total_pages,
                "totalResults": results.total_results,
                "results": listing_json(&ctx, &results.results, media_type),
            }));
        }
    }

    Ok(())
}
