use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("registry parse error in {source_label}: {message}")]
    Parse {
        source_label: String,
        message: String,
    },
    #[error("failed to read registry at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("registry declares no supported providers")]
    NoProviders,
    #[error("invalid provider name '{0}' (must be non-empty, lowercase and contain no ':')")]
    InvalidProvider(String),
    #[error("alias '{alias}' points at '{target}', which is not a supported provider")]
    DanglingAlias { alias: String, target: String },
    #[error("registry key must not be empty")]
    EmptyKey,
    #[error("registry key '{0}' is not lowercase")]
    KeyNotNormalized(String),
    #[error("registry key '{0}' has no provider prefix (expected '<provider>:<service>')")]
    MissingProvider(String),
    #[error("registry key '{key}' maps to sentinel kind '{kind}'")]
    SentinelKind { key: String, kind: String },
}

pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resource kind '{0}'")]
pub struct ParseKindError(pub String);
