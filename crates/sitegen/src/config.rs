// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Site configuration, parsed from `site.yaml`.

use crate::error::SitegenError;
use crate::timeline::Topic;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Component, Path};

/// Top-level site configuration.
///
/// ```yaml
/// site:
///   title: "DevConf.US 2020"
///   name: "DevConf.US"
///   url: "https://devconf.info"
///
/// event:
///   tagline: "open source community conference"
///   date: "August, 2020"
///   location: "Boston, USA"
///
/// topics:
///   - name: "Serverless"
///
/// pages:
///   - name: "home"
///     type: landing
///     output: "us/index.html"
///   - name: "faq"
///     type: markdown
///     output: "us/faq.html"
///     page: "pages/faq.md"
///
/// partials:
///   footer: "partials/footer.md"
///
/// static_dir: "static"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteMeta,
    #[serde(default)]
    pub event: EventInfo,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    #[serde(default)]
    pub about: Option<About>,
    #[serde(default)]
    pub topics: Vec<Topic>,
    #[serde(default)]
    pub dates: Vec<ImportantDate>,
    #[serde(default)]
    pub travel: Vec<TravelCard>,
    #[serde(default)]
    pub pages: Vec<PageConfig>,
    #[serde(default)]
    pub partials: BTreeMap<String, String>,
    #[serde(default)]
    pub stylesheets: Vec<String>,
    #[serde(default)]
    pub static_dir: Option<String>,
}

impl SiteConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, SitegenError> {
        let config: SiteConfig = serde_yaml_ng::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would produce a broken site.
    pub fn validate(&self) -> Result<(), SitegenError> {
        let mut outputs = std::collections::BTreeSet::new();
        for page in &self.pages {
            if page.output.trim().is_empty() {
                return Err(SitegenError::InvalidConfig(format!(
                    "page '{}' has an empty output path",
                    page.name
                )));
            }
            if page.page_type == PageType::Markdown && page.page.is_none() {
                return Err(SitegenError::InvalidConfig(format!(
                    "markdown page '{}' needs a 'page' source",
                    page.name
                )));
            }
            if !stays_in_output_dir(&page.output) {
                return Err(SitegenError::InvalidConfig(format!(
                    "page '{}' output '{}' leaves the build directory",
                    page.name, page.output
                )));
            }
            if !outputs.insert(page.output.as_str()) {
                return Err(SitegenError::InvalidConfig(format!(
                    "output '{}' is produced by more than one page",
                    page.output
                )));
            }
        }
        Ok(())
    }
}

/// Outputs are written below the build directory. A leading `/` is
/// allowed and means the build root; `..` and drive prefixes are not.
fn stays_in_output_dir(output: &str) -> bool {
    Path::new(output.trim_start_matches('/'))
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Site-wide metadata, also used for the social sharing tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeta {
    /// Browser title
    pub title: String,
    /// `og:site_name`; defaults to the title
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub description: String,
    /// Canonical URL (`og:url`)
    #[serde(default)]
    pub url: Option<String>,
    /// Social preview image (`og:image`, `twitter:image`)
    #[serde(default)]
    pub image: Option<String>,
}

impl SiteMeta {
    pub fn site_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.title)
    }
}

fn default_base_url() -> String {
    "/".to_string()
}

/// Hero banner content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventInfo {
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub logo_alt: String,
    /// Decorative artwork shown under the logo
    #[serde(default)]
    pub abstract_logo: Option<String>,
    #[serde(default)]
    pub abstract_logo_alt: String,
    /// Call-to-action button (e.g. a CFP link); hidden when absent
    #[serde(default)]
    pub cta: Option<NavLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    /// Open in a new tab
    #[serde(default)]
    pub external: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub title: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub heading: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_alt: String,
    /// Markdown paragraphs
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportantDate {
    #[serde(default)]
    pub when: String,
    #[serde(default)]
    pub what: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelCard {
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub icon_alt: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub href: Option<String>,
    /// CSS background colour of the card
    #[serde(default)]
    pub background: Option<String>,
}

/// One output page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Page name (for logging)
    pub name: String,
    #[serde(rename = "type")]
    pub page_type: PageType,
    /// Output path relative to the build directory (e.g. "us/index.html")
    pub output: String,
    /// Markdown source, relative to the config file
    #[serde(default)]
    pub page: Option<String>,
    /// Title override; markdown pages otherwise use their frontmatter
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    /// Hero, about, topics, dates and travel sections
    Landing,
    /// Markdown page with shortcodes
    Markdown,
}
