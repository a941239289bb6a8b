use std::{fmt, str::FromStr};

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::ValidationErrors;

pub const FIELD_RESOURCE_TYPE: &str = "type";
pub const UNKNOWN_RESOURCE: &str = "Unknown resource type";

/// Route prefix the documents are served under.
pub const RESOURCE_ROUTE: &str = "/resources";

#[derive(Embed)]
#[folder = "resources"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct ResourceFiles;

/// The downloadable documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Resume,
    Metrics,
    Framework,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Resume,
        ResourceKind::Metrics,
        ResourceKind::Framework,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Resume => "resume",
            Self::Metrics => "metrics",
            Self::Framework => "framework",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Resume => "Executive Resume",
            Self::Metrics => "Impact Metrics Report",
            Self::Framework => "Speed Innovation Playbook",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Resume => "Complete track record of breakthrough achievements",
            Self::Metrics => "Quantified results: $250M+ impact, 95.5% success rates",
            Self::Framework => "Silicon Valley methodology for medical devices",
        }
    }

    /// Name of the embedded document under `resources/`.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Resume => "pk-koduri-resume.md",
            Self::Metrics => "pk-koduri-impact-metrics.md",
            Self::Framework => "speed-innovation-playbook.md",
        }
    }

    pub fn download_url(self) -> String {
        format!("{RESOURCE_ROUTE}/{}", self.file_name())
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown resource type: {0}")]
pub struct UnknownResource(pub String);

impl FromStr for ResourceKind {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownResource(s.to_string()))
    }
}

/// Which asset a download action asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRequest {
    pub resource_type: String,
}

impl DownloadRequest {
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            resource_type: kind.as_str().to_string(),
        }
    }

    pub fn resource(&self) -> Result<ResourceKind, ValidationErrors> {
        self.resource_type.trim().parse().map_err(|_| {
            let mut errors = ValidationErrors::new();
            errors.push(FIELD_RESOURCE_TYPE, UNKNOWN_RESOURCE);
            errors
        })
    }
}

impl Default for DownloadRequest {
    fn default() -> Self {
        Self::new(ResourceKind::Resume)
    }
}
