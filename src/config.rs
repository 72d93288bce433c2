use anyhow::{Context, Result, anyhow};
use std::{borrow::Cow, env, path::PathBuf};

use crate::registry::Registry;

pub const REGISTRY_ENV: &str = "RESOURCE_KINDS_REGISTRY";

/// Where the active registry comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistrySource {
    Embedded,
    File(PathBuf),
}

impl RegistrySource {
    /// Resolve the registry source from the CLI flag and `RESOURCE_KINDS_REGISTRY`.
    ///
    /// - `--registry` trumps the environment variable.
    /// - An empty environment value counts as unset.
    /// - Missing settings fall back to the embedded registry.
    pub fn resolve(cli_path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = cli_path {
            return Ok(RegistrySource::File(path));
        }
        match env::var(REGISTRY_ENV) {
            Ok(val) if val.trim().is_empty() => Ok(RegistrySource::Embedded),
            Ok(val) => Ok(RegistrySource::File(PathBuf::from(val))),
            Err(env::VarError::NotPresent) => Ok(RegistrySource::Embedded),
            Err(err) => Err(anyhow!("failed to read {REGISTRY_ENV}: {err}")),
        }
    }

    pub fn load(&self) -> Result<Cow<'static, Registry>> {
        match self {
            RegistrySource::Embedded => Ok(Cow::Borrowed(Registry::embedded())),
            RegistrySource::File(path) => Registry::load_from_file(path)
                .map(Cow::Owned)
                .with_context(|| format!("unable to load registry from {}", path.display())),
        }
    }
}
