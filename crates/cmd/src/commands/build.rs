//! Build command - renders every configured page into the output directory
//!
//! Example:
//!   devconf build --config site/site.yaml --output build --branch master --clean

use std::path::PathBuf;

use anyhow::{Context, Result};
use sitegen::{BuildOptions, BuildReport};

use crate::common::SiteContext;

#[derive(Debug, Clone)]
pub struct BuildArgs {
    pub output: PathBuf,
    pub branch: String,
    pub clean: bool,
    pub local: bool,
}

pub fn build_command(
    site: &SiteContext,
    args: &BuildArgs,
    mut out: impl FnMut(String),
) -> Result<BuildReport> {
    diagnostics::debug!(
        "Building {config} into {output}",
        config: site.config_path.display().to_string(),
        output: args.output.display().to_string()
    );

    let options = BuildOptions {
        output_dir: args.output.clone(),
        branch: args.branch.clone(),
        clean: args.clean,
        local: args.local,
    };

    let report = sitegen::generate_site_from_dir(&site.config, &site.root, &options)
        .with_context(|| format!("Build failed for {}", site.config_path.display()))?;

    for page in &report.pages {
        out(format!("{}", args.output.join(page).display()));
    }
    for skipped in &report.skipped_assets {
        out(format!("skipped existing static path: {}", skipped));
    }
    out(format!(
        "✓ Built {} pages, copied {} static entries",
        report.pages.len(),
        report.assets.len()
    ));
    Ok(report)
}
