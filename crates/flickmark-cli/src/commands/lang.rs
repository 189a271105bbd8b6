use color_eyre::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use flickmark_models::Language;
use flickmark_store::{SetLanguageOutcome, WriteStatus};
use serde_json::json;

use crate::commands::open_context;
use crate::output::{Output, OutputFormat};

pub fn run_show(output: &Output) -> Result<()> {
    let ctx = open_context()?;
    let language = ctx.locale.language();

    match output.format() {
        OutputFormat::Human => {
            output.println(format!(
                "{}: {} ({}, {})",
                ctx.locale.translate("language"),
                language.code(),
                language.display_name(),
                language.direction()
            ));
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "code": language.code(),
                "displayName": language.display_name(),
                "direction": language.direction().as_str(),
            }));
        }
    }

    Ok(())
}

pub fn run_list(output: &Output) -> Result<()> {
    let ctx = open_context()?;
    let active = ctx.locale.language();

    match output.format() {
        OutputFormat::Human => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["", "Code", "Name", "Direction"]);
            for language in Language::ALL {
                let marker = if language == active { "*" } else { "" };
                table.add_row(vec![
                    marker,
                    language.code(),
                    language.display_name(),
                    language.direction().as_str(),
                ]);
            }
            output.println(table.to_string());
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            let languages: Vec<_> = Language::ALL
                .iter()
                .map(|language| {
                    json!({
                        "code": language.code(),
                        "displayName": language.display_name(),
                        "direction": language.direction().as_str(),
                        "active": *language == active,
                    })
                })
                .collect();
            output.json(&json!(languages));
        }
    }

    Ok(())
}

pub fn run_set(code: &str, output: &Output) -> Result<()> {
    let mut ctx = open_context()?;

    match ctx.locale.set_language(code) {
        SetLanguageOutcome::Changed(WriteStatus::Persisted) => {
            output.success(format!(
                "{}: {} ({})",
                ctx.locale.translate("language"),
                ctx.locale.language().display_name(),
                ctx.locale.direction()
            ));
        }
        SetLanguageOutcome::Changed(WriteStatus::MemoryOnly(e)) => {
            output.warn(format!(
                "Language switched to {} but the selection could not be persisted: {}",
                ctx.locale.language().code(),
                e
            ));
        }
        SetLanguageOutcome::Unsupported => {
            let supported: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
            output.error(format!(
                "Unsupported language code `{}`. Supported: {}",
                code,
                supported.join(", ")
            ));
        }
    }

    Ok(())
}
