use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseKindError;

/// Display category of a cloud resource type.
///
/// `NotFound` and `Unsupported` are outcomes of classification rather than
/// categories: the former means the provider is covered but no registry entry
/// matched, the latter that classification was not attempted at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Api,
    /// Databases.
    Data,
    /// Blob, file, block and object storage.
    Storage,
    Compute,
    /// More specific than compute.
    Container,
    Security,
    Identity,
    /// Tools for managing resources.
    Management,
    Network,
    Messaging,
    Timer,
    /// Logs, analytics.
    Observability,
    /// Dev tools, deployment.
    Build,
    MachineLearning,
    Media,
    /// Catch-all for resources that don't fit any other category.
    Misc,
    Unknown,
    #[serde(rename = "not-found")]
    NotFound,
    Unsupported,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 19] = [
        ResourceKind::Api,
        ResourceKind::Data,
        ResourceKind::Storage,
        ResourceKind::Compute,
        ResourceKind::Container,
        ResourceKind::Security,
        ResourceKind::Identity,
        ResourceKind::Management,
        ResourceKind::Network,
        ResourceKind::Messaging,
        ResourceKind::Timer,
        ResourceKind::Observability,
        ResourceKind::Build,
        ResourceKind::MachineLearning,
        ResourceKind::Media,
        ResourceKind::Misc,
        ResourceKind::Unknown,
        ResourceKind::NotFound,
        ResourceKind::Unsupported,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Api => "api",
            ResourceKind::Data => "data",
            ResourceKind::Storage => "storage",
            ResourceKind::Compute => "compute",
            ResourceKind::Container => "container",
            ResourceKind::Security => "security",
            ResourceKind::Identity => "identity",
            ResourceKind::Management => "management",
            ResourceKind::Network => "network",
            ResourceKind::Messaging => "messaging",
            ResourceKind::Timer => "timer",
            ResourceKind::Observability => "observability",
            ResourceKind::Build => "build",
            ResourceKind::MachineLearning => "machinelearning",
            ResourceKind::Media => "media",
            ResourceKind::Misc => "misc",
            ResourceKind::Unknown => "unknown",
            ResourceKind::NotFound => "not-found",
            ResourceKind::Unsupported => "unsupported",
        }
    }

    /// True for the two outcomes that never appear as registry values.
    pub fn is_sentinel(self) -> bool {
        matches!(self, ResourceKind::NotFound | ResourceKind::Unsupported)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}
