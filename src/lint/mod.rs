mod redundant_override;

pub use redundant_override::check_redundant_overrides;

use crate::{registry::Registry, resolve::provider_of};

/// Run every registry authoring check. Findings are prefixed with the rule name.
pub fn lint_registry(registry: &Registry) -> Vec<String> {
    let mut errors = lint_providers(registry);
    errors.extend(check_redundant_overrides(registry));
    errors
}

/// Keys whose provider is outside the supported set can never be matched.
pub fn lint_providers(registry: &Registry) -> Vec<String> {
    let mut errors = Vec::new();
    for (key, _) in registry.entries() {
        if !registry.is_supported_provider(key) {
            errors.push(format!(
                "provider_supported: key '{key}' uses provider '{}', which is not in the supported set",
                provider_of(key).unwrap_or_default()
            ));
        }
    }
    errors
}
