use color_eyre::Result;
use flickmark_models::MediaType;

use crate::commands::{listing_json, listing_table, open_catalog, open_context};
use crate::output::{Output, OutputFormat};

pub async fn run_show(media_type: MediaType, id: &str, output: &Output) -> Result<()> {
    let ctx = open_context()?;
    let catalog = open_catalog(&ctx.paths)?;
    let language = ctx.locale.language().code();

    let detail = catalog.details(media_type, id, language).await?;
    let recommendations = catalog.recommendations(media_type, id, language).await?;

    if let OutputFormat::Json | OutputFormat::JsonPretty = output.format() {
        output.json(&serde_json::json!({
            "id": detail.id,
            "type": media_type.as_str(),
            "title": detail.display_title(),
            "date": detail.date(),
            "rating": detail.vote_average,
            "overview": detail.overview,
            "genres": detail.genres.iter().map(|g| g.name.as_str()).collect::<Vec<_>>(),
            "runtimeMinutes": detail.runtime_minutes(),
            "spokenLanguages": detail
                .spoken_languages
                .iter()
                .map(|l| l.display_name())
                .collect::<Vec<_>>(),
            "homepage": detail.homepage,
            "posterUrl": detail.poster_url(),
            "wishlisted": ctx.wishlist.contains(id, Some(media_type)),
            "recommendations": listing_json(&ctx, &recommendations.results, media_type),
        }));
        return Ok(());
    }

    let unknown_date = ctx.locale.translate("unknownDate");
    output.println(format!(
        "{} ({})  {:.1}/10",
        detail.display_title(),
        detail.date().unwrap_or(unknown_date),
        detail.vote_average
    ));

    if !detail.genres.is_empty() {
        let genres: Vec<&str> = detail.genres.iter().map(|g| g.name.as_str()).collect();
        output.println(genres.join(", "));
    }
    if let Some(minutes) = detail.runtime_minutes() {
        output.println(format!(
            "{}: {} {}",
            ctx.locale.translate("duration"),
            minutes,
            ctx.locale.translate("minutes")
        ));
    }
    if !detail.spoken_languages.is_empty() {
        let languages: Vec<&str> = detail
            .spoken_languages
            .iter()
            .map(|l| l.display_name())
            .collect();
        output.println(format!(
            "{}: {}",
            ctx.locale.translate("language"),
            languages.join(", ")
        ));
    }
    if let Some(overview) = detail.overview.as_deref().filter(|o| !o.is_empty()) {
        output.println("");
        output.println(overview);
    }
    if let Some(homepage) = detail.homepage.as_deref().filter(|h| !h.is_empty()) {
        output.println(homepage);
    }

    output.println("");
    output.println(ctx.locale.translate("recommendations"));
    if recommendations.results.is_empty() {
        output.info(ctx.locale.translate("noRecommendations"));
    } else {
        output.println(listing_table(&ctx, &recommendations.results, media_type).to_string());
    }

    Ok(())
}
