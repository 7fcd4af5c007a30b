// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Site build.
//!
//! 1. Optionally removes the previous build
//! 2. Copies the static directory into the build root
//! 3. Renders each configured page: landing sections, or
//!    markdown → shortcodes → HTML
//! 4. Wraps it in a layout and writes it below the output directory

use crate::config::{PageConfig, PageType, SiteConfig};
use crate::error::{Result, SitegenError};
use crate::layouts::{self, LayoutContext};
use crate::markdown::{self, render_markdown};
use crate::sections;
use crate::shortcodes::{self, ShortcodeContext};
use crate::urls::UrlMode;
use diagnostics::{debug, info, warn};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Branch name recorded in pages when none is given.
pub const DEFAULT_BRANCH: &str = "devel";

/// Options for one build.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub output_dir: PathBuf,
    pub branch: String,
    /// Remove `output_dir` before building
    pub clean: bool,
    /// Rewrite absolute URLs to `file://` paths into the build directory
    pub local: bool,
}

impl BuildOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            branch: DEFAULT_BRANCH.to_string(),
            clean: false,
            local: false,
        }
    }
}

/// What a build produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Output paths of written pages, relative to the build directory
    pub pages: Vec<String>,
    /// Top-level static entries copied into the build directory
    pub assets: Vec<String>,
    /// Static entries skipped because the destination already existed
    pub skipped_assets: Vec<String>,
}

/// Reads a page or partial source by its config-relative path.
pub type ReadSource<'a> = &'a dyn Fn(&str) -> std::io::Result<String>;

/// Frontmatter at the top of a markdown page.
#[derive(Debug, Deserialize)]
struct Frontmatter {
    #[serde(default)]
    title: Option<String>,
    #[serde(default = "default_layout")]
    layout: String,
}

fn default_layout() -> String {
    "page".to_string()
}

/// Build the site described by `config`, with sources and the static
/// directory resolved relative to `root`.
pub fn generate_site_from_dir(
    config: &SiteConfig,
    root: &Path,
    options: &BuildOptions,
) -> Result<BuildReport> {
    let read = |path: &str| fs::read_to_string(root.join(path));
    let static_dir = config.static_dir.as_ref().map(|dir| root.join(dir));
    generate_site(config, &read, static_dir.as_deref(), options)
}

/// Build the site.
///
/// `read_source` loads markdown pages and partials; `static_dir`, when
/// present, is copied into the output root first.
pub fn generate_site(
    config: &SiteConfig,
    read_source: ReadSource<'_>,
    static_dir: Option<&Path>,
    options: &BuildOptions,
) -> Result<BuildReport> {
    config.validate()?;
    let output_dir = &options.output_dir;
    let mut report = BuildReport::default();

    if options.clean && output_dir.exists() {
        debug!("Cleaning up old build in {dir}", dir: output_dir.display().to_string());
        fs::remove_dir_all(output_dir).map_err(|e| SitegenError::io(output_dir, e))?;
    }
    fs::create_dir_all(output_dir).map_err(|e| SitegenError::io(output_dir, e))?;

    if let Some(dir) = static_dir {
        copy_static(dir, output_dir, &mut report)?;
    }

    let urls = if options.local {
        let abs = fs::canonicalize(output_dir).map_err(|e| SitegenError::io(output_dir, e))?;
        UrlMode::local(abs)
    } else {
        UrlMode::site(&config.site.base_url)
    };

    let stylesheets: Vec<String> = config.stylesheets.iter().map(|s| urls.rewrite(s)).collect();
    let image = config.site.image.as_deref().map(|img| absolute_image_url(config, &urls, img));
    let home_href = home_href(config, &urls);

    let sc_ctx = Arc::new(ShortcodeContext {
        site_title: config.site.title.clone(),
        topics: config.topics.clone(),
        dates: config.dates.clone(),
        urls: urls.clone(),
    });
    let sc = shortcodes::register_shortcodes(sc_ctx);
    let footer = render_partial(config, "footer", read_source, &sc);

    for page in &config.pages {
        let (title, layout, content) = match page.page_type {
            PageType::Landing => (
                page.title.clone().unwrap_or_else(|| config.site.title.clone()),
                "landing".to_string(),
                sections::landing_page(config, &urls).into_string(),
            ),
            PageType::Markdown => render_markdown_page(config, page, read_source, &sc)?,
        };

        let html = layouts::apply_layout(
            &layout,
            &LayoutContext {
                title: &title,
                site: &config.site,
                branch: &options.branch,
                stylesheets: &stylesheets,
                image: image.as_deref(),
                content: &content,
                footer: footer.as_deref(),
                home_href: &home_href,
            },
        );

        let out_path = output_dir.join(page.output.trim_start_matches('/'));
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|e| SitegenError::io(parent, e))?;
        }
        fs::write(&out_path, html.as_bytes()).map_err(|e| SitegenError::io(&out_path, e))?;

        info!("Exporting {page} to {path}", page: page.name.as_str(), path: out_path.display().to_string());
        report.pages.push(page.output.clone());
    }

    info!(
        "Site generation complete: {pages} pages, {assets} static entries",
        pages: report.pages.len(),
        assets: report.assets.len()
    );
    Ok(report)
}

fn render_markdown_page(
    config: &SiteConfig,
    page: &PageConfig,
    read_source: ReadSource<'_>,
    sc: &markdown::Shortcodes,
) -> Result<(String, String, String)> {
    let source = page.page.as_deref().ok_or_else(|| {
        SitegenError::InvalidConfig(format!("markdown page '{}' needs a 'page' source", page.name))
    })?;

    let raw = read_source(source).map_err(|e| SitegenError::Source {
        path: source.to_string(),
        message: e.to_string(),
    })?;

    let (fm_yaml, body) = split_frontmatter(&raw);
    let fm: Frontmatter = if fm_yaml.is_empty() {
        Frontmatter {
            title: None,
            layout: default_layout(),
        }
    } else {
        serde_yaml_ng::from_str(&fm_yaml).map_err(|e| SitegenError::Frontmatter {
            page: source.to_string(),
            source: e,
        })?
    };

    let expanded = markdown::preprocess_shortcodes(&body, sc).map_err(|message| {
        SitegenError::Shortcode {
            page: source.to_string(),
            message,
        }
    })?;
    debug!("Expanded shortcodes in {page}", page: source);

    let title = page
        .title
        .clone()
        .or(fm.title)
        .unwrap_or_else(|| config.site.title.clone());
    Ok((title, fm.layout, render_markdown(&expanded)))
}

/// Copy each entry of `static_dir` into `output_dir`. Entries whose
/// destination already exists are skipped with a warning.
fn copy_static(static_dir: &Path, output_dir: &Path, report: &mut BuildReport) -> Result<()> {
    let entries = fs::read_dir(static_dir).map_err(|e| SitegenError::io(static_dir, e))?;
    let mut names: Vec<PathBuf> = entries
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()
        .map_err(|e| SitegenError::io(static_dir, e))?;
    names.sort();

    for from in names {
        let Some(name) = from.file_name() else {
            continue;
        };
        let name_str = name.to_string_lossy().to_string();
        let to = output_dir.join(name);
        if to.exists() {
            warn!("\"static\" path already exists: {path}", path: to.display().to_string());
            report.skipped_assets.push(name_str);
            continue;
        }
        debug!("Copying \"static\" to build dir: {path}", path: to.display().to_string());
        copy_recursive(&from, &to)?;
        report.assets.push(name_str);
    }
    Ok(())
}

/// Copy a file or directory tree. Symlinks are not followed into
/// directories, so a link cycle under `static/` cannot recurse forever;
/// symlinked directories are skipped with a warning, symlinked files are
/// copied by content.
fn copy_recursive(from: &Path, to: &Path) -> Result<()> {
    let file_type = fs::symlink_metadata(from)
        .map_err(|e| SitegenError::io(from, e))?
        .file_type();
    if file_type.is_dir() {
        fs::create_dir_all(to).map_err(|e| SitegenError::io(to, e))?;
        for entry in fs::read_dir(from).map_err(|e| SitegenError::io(from, e))? {
            let entry = entry.map_err(|e| SitegenError::io(from, e))?;
            copy_recursive(&entry.path(), &to.join(entry.file_name()))?;
        }
    } else if file_type.is_symlink() && from.is_dir() {
        warn!("Not following directory symlink {path}", path: from.display().to_string());
    } else {
        fs::copy(from, to).map_err(|e| SitegenError::io(from, e))?;
    }
    Ok(())
}

/// Render a markdown partial. A partial that cannot be read or expanded
/// is logged and left out.
fn render_partial(
    config: &SiteConfig,
    name: &str,
    read_source: ReadSource<'_>,
    sc: &markdown::Shortcodes,
) -> Option<String> {
    let path = config.partials.get(name)?;
    let expanded = read_source(path)
        .map_err(|e| e.to_string())
        .and_then(|md| markdown::preprocess_shortcodes(&md, sc));
    match expanded {
        Ok(md) => Some(render_markdown(&md)),
        Err(err) => {
            warn!(
                "Cannot render partial {name} from {path}: {err}",
                name,
                path: path.as_str(),
                err: err.as_str()
            );
            None
        }
    }
}

/// Social preview images need an absolute URL; prefer the canonical site
/// URL over a base-relative path when publishing.
fn absolute_image_url(config: &SiteConfig, urls: &UrlMode, image: &str) -> String {
    match (&config.site.url, urls) {
        (Some(site_url), UrlMode::Site { .. }) if image.starts_with('/') => {
            format!("{}{}", site_url.trim_end_matches('/'), image)
        }
        _ => urls.rewrite(image),
    }
}

/// Where the "home" link of content pages points: the first landing page,
/// else the site root.
fn home_href(config: &SiteConfig, urls: &UrlMode) -> String {
    let target = config
        .pages
        .iter()
        .find(|p| p.page_type == PageType::Landing)
        .map(|p| format!("/{}", p.output.trim_start_matches('/')))
        .unwrap_or_else(|| "/".to_string());
    urls.rewrite(&target)
}

fn split_frontmatter(content: &str) -> (String, String) {
    let trimmed = content.trim_start();
    let Some(after) = trimmed.strip_prefix("---") else {
        return (String::new(), content.to_string());
    };
    match after.find("\n---") {
        Some(end) => (after[..end].trim().to_string(), after[end + 4..].to_string()),
        None => (String::new(), content.to_string()),
    }
}
