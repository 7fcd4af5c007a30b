use anyhow::{Context, Result};
use serde_json::json;
use sitegen::PageType;

use crate::common::SiteContext;

/// Validate the configuration and list the pages a build would write.
///
/// Markdown sources are checked for existence so a broken reference shows
/// up before a build.
pub fn check_command(site: &SiteContext, as_json: bool, mut out: impl FnMut(String)) -> Result<()> {
    let config = &site.config;
    let mut missing = Vec::new();
    for source in config.pages.iter().filter_map(|p| p.page.as_ref()) {
        if !site.root.join(source).is_file() {
            missing.push(source.clone());
        }
    }
    if let Some(dir) = &config.static_dir {
        if !site.root.join(dir).is_dir() {
            missing.push(dir.clone());
        }
    }

    if as_json {
        let pages: Vec<_> = config
            .pages
            .iter()
            .map(|p| {
                json!({
                    "name": p.name,
                    "type": p.page_type,
                    "output": p.output,
                    "source": p.page,
                })
            })
            .collect();
        let summary = json!({
            "title": config.site.title,
            "topics": config.topics.len(),
            "timeline_items": sitegen::timeline::item_count(config.topics.len()),
            "dates": config.dates.len(),
            "travel": config.travel.len(),
            "pages": pages,
            "missing": missing,
        });
        out(serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?);
    } else {
        out(format!("{}: {}", site.config_path.display(), config.site.title));
        for page in &config.pages {
            let kind = match page.page_type {
                PageType::Landing => "landing",
                PageType::Markdown => "markdown",
            };
            out(format!("  {:<10} {:<9} {}", page.name, kind, page.output));
        }
        for path in &missing {
            out(format!("  missing: {}", path));
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(anyhow::anyhow!("{} referenced path(s) missing", missing.len()))
    }
}
