// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! # Sitegen — static site generator for the DevConf conference pages
//!
//! A `site.yaml` describes the event, its topics, important dates and
//! travel information. Landing pages are composed from Maud sections;
//! content pages are markdown (pulldown-cmark) with shortcodes.
//!
//! The topics list is laid out as a centered timeline that alternates
//! left and right, see [`timeline`].
//!
//! ## Usage
//!
//! ```bash
//! devconf build --config site/site.yaml --output build
//! ```

mod config;
mod error;
mod generate;
mod layouts;
pub mod markdown;
pub mod sections;
mod shortcodes;
pub mod timeline;
mod urls;

pub use config::{
    About, EventInfo, ImportantDate, NavLink, PageConfig, PageType, SiteConfig, SiteMeta,
    SocialLink, TravelCard,
};
pub use error::{Result, SitegenError};
pub use generate::{
    BuildOptions, BuildReport, DEFAULT_BRANCH, ReadSource, generate_site, generate_site_from_dir,
};
pub use layouts::{LayoutContext, apply_layout};
pub use timeline::{TimelineEvent, Topic, render_timeline};
pub use urls::UrlMode;
