#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Core type definitions shared by the crdprep crates
//!
//! Download policy, output selection and the structured reports returned by
//! the prepare-crds pipeline.

pub mod reports;

pub use reports::{
    CacheStatus, FetchOutcome, FreshnessDecision, FreshnessReason, PrepareCrdsReport,
    UnpackOutcome,
};

use crdprep_errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a cached CRD archive may be reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DownloadPolicy {
    /// Always download, discarding any cached archive
    #[serde(alias = "always")]
    Always,
    /// Download only when no valid archive is cached
    #[default]
    #[serde(alias = "if-not-present", alias = "ifnotpresent", alias = "if_not_present")]
    IfNotPresent,
}

impl DownloadPolicy {
    /// Canonical configuration spelling
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "Always",
            Self::IfNotPresent => "IfNotPresent",
        }
    }
}

impl fmt::Display for DownloadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DownloadPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "ifnotpresent" | "if-not-present" | "if_not_present" => Ok(Self::IfNotPresent),
            _ => Err(ConfigError::InvalidValue {
                field: "download_policy".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

// Implement clap::ValueEnum for DownloadPolicy
impl clap::ValueEnum for DownloadPolicy {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Always, Self::IfNotPresent]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(match self {
            Self::Always => clap::builder::PossibleValue::new("always"),
            Self::IfNotPresent => clap::builder::PossibleValue::new("if-not-present"),
        })
    }
}

/// Output format for CLI reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}
