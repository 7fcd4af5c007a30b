// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a site or building it.
#[derive(Error, Debug)]
pub enum SitegenError {
    #[error("Invalid site.yaml: {0}")]
    Config(#[from] serde_yaml_ng::Error),

    #[error("Invalid site.yaml: {0}")]
    InvalidConfig(String),

    #[error("Cannot read '{path}': {message}")]
    Source { path: String, message: String },

    #[error("Bad frontmatter in '{page}': {source}")]
    Frontmatter {
        page: String,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("Shortcode error in '{page}': {message}")]
    Shortcode { page: String, message: String },

    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SitegenError {
    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        SitegenError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SitegenError>;
