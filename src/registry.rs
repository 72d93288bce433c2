use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fs,
    path::Path,
};
use tracing::{debug, trace};

use crate::{
    error::{RegistryError, Result},
    kind::ResourceKind,
    resolve::{normalize, prefix_chain, provider_of},
};

const EMBEDDED_REGISTRY: &str = include_str!("../data/resource_kinds.json");
const EMBEDDED_REGISTRY_LABEL: &str = "<embedded registry>";

lazy_static::lazy_static! {
    static ref EMBEDDED: Registry = Registry::from_json_str_with_source(
        EMBEDDED_REGISTRY,
        EMBEDDED_REGISTRY_LABEL,
    )
    .expect("embedded resource kind registry is valid");
}

/// On-disk shape of a registry document.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryDoc {
    pub providers: BTreeSet<String>,
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    #[serde(default)]
    pub kinds: HashMap<String, ResourceKind>,
}

/// Immutable mapping from normalized type prefixes to resource kinds, gated by
/// the set of providers it claims to cover.
#[derive(Clone, Debug)]
pub struct Registry {
    providers: BTreeSet<String>,
    aliases: BTreeMap<String, String>,
    kinds: HashMap<String, ResourceKind>,
}

/// Outcome of classifying one resource type, with the key that decided it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub normalized: String,
    pub kind: ResourceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_key: Option<String>,
}

impl Registry {
    /// The registry bundled with the crate, parsed on first use.
    pub fn embedded() -> &'static Registry {
        &EMBEDDED
    }

    pub fn from_doc(doc: RegistryDoc) -> Result<Self> {
        let RegistryDoc {
            providers,
            aliases,
            kinds,
        } = doc;

        if providers.is_empty() {
            return Err(RegistryError::NoProviders);
        }
        for provider in providers.iter().chain(aliases.keys()) {
            if !is_valid_provider(provider) {
                return Err(RegistryError::InvalidProvider(provider.clone()));
            }
        }
        for (alias, target) in &aliases {
            if !providers.contains(target) {
                return Err(RegistryError::DanglingAlias {
                    alias: alias.clone(),
                    target: target.clone(),
                });
            }
        }
        for (key, kind) in &kinds {
            if key.is_empty() {
                return Err(RegistryError::EmptyKey);
            }
            if key.to_lowercase() != *key {
                return Err(RegistryError::KeyNotNormalized(key.clone()));
            }
            if provider_of(key).is_none_or(str::is_empty) {
                return Err(RegistryError::MissingProvider(key.clone()));
            }
            if kind.is_sentinel() {
                return Err(RegistryError::SentinelKind {
                    key: key.clone(),
                    kind: kind.to_string(),
                });
            }
        }

        Ok(Registry {
            providers,
            aliases,
            kinds,
        })
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::from_json_str_with_source(text, "<inline>")
    }

    /// Same as [`Registry::from_json_str`] but labels the source for diagnostics.
    pub fn from_json_str_with_source(text: &str, source_label: &str) -> Result<Self> {
        let doc: RegistryDoc =
            serde_json::from_str(text).map_err(|err| RegistryError::Parse {
                source_label: source_label.to_string(),
                message: err.to_string(),
            })?;
        Self::from_doc(doc)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Self::from_toml_str_with_source(text, "<inline>")
    }

    #[cfg(feature = "toml")]
    pub fn from_toml_str_with_source(text: &str, source_label: &str) -> Result<Self> {
        let doc: RegistryDoc = toml::from_str(text).map_err(|err| RegistryError::Parse {
            source_label: source_label.to_string(),
            message: err.to_string(),
        })?;
        Self::from_doc(doc)
    }

    /// Load a registry from disk, accepting JSON by default and TOML when the `toml` feature is enabled.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let label = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        #[cfg(feature = "toml")]
        let registry = if path.extension().is_some_and(|ext| ext == "toml") {
            Self::from_toml_str_with_source(&text, &label)?
        } else {
            Self::from_json_str_with_source(&text, &label)?
        };

        #[cfg(not(feature = "toml"))]
        let registry = Self::from_json_str_with_source(&text, &label)?;

        debug!(
            path = %label,
            providers = registry.providers.len(),
            entries = registry.kinds.len(),
            "loaded resource kind registry"
        );
        Ok(registry)
    }

    /// Classify a resource type string. Total over all inputs.
    pub fn classify(&self, resource_type: &str) -> ResourceKind {
        self.resolve(resource_type).kind
    }

    /// Classify and report which registry key, if any, decided the result.
    pub fn resolve(&self, resource_type: &str) -> Resolution {
        let normalized = normalize(resource_type, &self.aliases);

        if !self.is_supported_provider(&normalized) {
            trace!(%resource_type, "provider not supported");
            return Resolution {
                normalized,
                kind: ResourceKind::Unsupported,
                matched_key: None,
            };
        }

        let hit = prefix_chain(&normalized)
            .find_map(|candidate| self.kinds.get(candidate).map(|kind| (candidate, *kind)));
        match hit {
            Some((key, kind)) => {
                trace!(%resource_type, %key, %kind, "classified");
                let matched_key = Some(key.to_string());
                Resolution {
                    normalized,
                    kind,
                    matched_key,
                }
            }
            None => {
                trace!(%resource_type, "no registry entry matched");
                Resolution {
                    normalized,
                    kind: ResourceKind::NotFound,
                    matched_key: None,
                }
            }
        }
    }

    /// Exact lookup of an already-normalized key.
    pub fn lookup(&self, key: &str) -> Option<ResourceKind> {
        self.kinds.get(key).copied()
    }

    /// Whether a normalized, alias-folded type string names a covered provider.
    pub fn is_supported_provider(&self, normalized: &str) -> bool {
        provider_of(normalized).is_some_and(|provider| self.providers.contains(provider))
    }

    pub fn providers(&self) -> impl Iterator<Item = &str> {
        self.providers.iter().map(String::as_str)
    }

    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(alias, target)| (alias.as_str(), target.as_str()))
    }

    /// All entries sorted by key.
    pub fn entries(&self) -> Vec<(&str, ResourceKind)> {
        let mut entries: Vec<_> = self
            .kinds
            .iter()
            .map(|(key, kind)| (key.as_str(), *kind))
            .collect();
        entries.sort_unstable_by_key(|(key, _)| *key);
        entries
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

fn is_valid_provider(name: &str) -> bool {
    !name.is_empty() && !name.contains(':') && name.to_lowercase() == name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(kinds: &[(&str, ResourceKind)]) -> RegistryDoc {
        RegistryDoc {
            providers: BTreeSet::from(["aws".to_string()]),
            aliases: BTreeMap::new(),
            kinds: kinds
                .iter()
                .map(|(key, kind)| (key.to_string(), *kind))
                .collect(),
        }
    }

    #[test]
    fn embedded_registry_parses() {
        let registry = Registry::embedded();
        assert!(!registry.is_empty());
        assert_eq!(registry.lookup("aws:lambda"), Some(ResourceKind::Compute));
    }

    #[test]
    fn rejects_mixed_case_keys() {
        let err = Registry::from_doc(doc(&[("aws:Lambda", ResourceKind::Compute)])).unwrap_err();
        assert!(matches!(err, RegistryError::KeyNotNormalized(key) if key == "aws:Lambda"));
    }

    #[test]
    fn rejects_sentinel_values() {
        let err = Registry::from_doc(doc(&[("aws:x", ResourceKind::NotFound)])).unwrap_err();
        assert!(matches!(err, RegistryError::SentinelKind { .. }));
    }

    #[test]
    fn rejects_keys_without_provider() {
        let err = Registry::from_doc(doc(&[("lambda", ResourceKind::Compute)])).unwrap_err();
        assert!(matches!(err, RegistryError::MissingProvider(_)));
        let err = Registry::from_doc(doc(&[(":lambda", ResourceKind::Compute)])).unwrap_err();
        assert!(matches!(err, RegistryError::MissingProvider(_)));
        let err = Registry::from_doc(doc(&[("", ResourceKind::Compute)])).unwrap_err();
        assert!(matches!(err, RegistryError::EmptyKey));
    }

    #[test]
    fn resolution_reports_matched_key() {
        let registry = Registry::from_doc(doc(&[("aws:s3", ResourceKind::Storage)])).unwrap();
        let resolution = registry.resolve("AWS:S3/Bucket:Bucket");
        assert_eq!(resolution.normalized, "aws:s3/bucket:bucket");
        assert_eq!(resolution.kind, ResourceKind::Storage);
        assert_eq!(resolution.matched_key.as_deref(), Some("aws:s3"));
    }
}
