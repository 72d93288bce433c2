use crate::{
    registry::Registry,
    resolve::{peel_segment, prefix_chain},
};

/// Flag keys that resolve to the same kind as their nearest registered ancestor.
pub fn check_redundant_overrides(registry: &Registry) -> Vec<String> {
    let mut errors = Vec::new();
    for (key, kind) in registry.entries() {
        let Some(parent) = peel_segment(key) else {
            continue;
        };
        let ancestor = prefix_chain(parent)
            .find_map(|candidate| registry.lookup(candidate).map(|k| (candidate, k)));
        if let Some((ancestor, ancestor_kind)) = ancestor
            && ancestor_kind == kind
        {
            errors.push(format!(
                "redundant_override: key '{key}' repeats kind '{kind}' already inherited from '{ancestor}'"
            ));
        }
    }
    errors
}
