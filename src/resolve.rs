use std::collections::BTreeMap;

/// Lowercase a resource type and fold a provider alias into its target.
///
/// At most one alias is applied; the folded result is never re-examined.
pub fn normalize(resource_type: &str, aliases: &BTreeMap<String, String>) -> String {
    let lowered = resource_type.to_lowercase();
    if let Some(provider) = provider_of(&lowered)
        && let Some(target) = aliases.get(provider)
    {
        return format!("{target}{}", &lowered[provider.len()..]);
    }
    lowered
}

/// Provider segment of a type string, i.e. everything before the first `:`.
pub fn provider_of(resource_type: &str) -> Option<&str> {
    resource_type.split_once(':').map(|(provider, _)| provider)
}

/// Drop the most specific segment, whichever of `:` or `/` introduced it.
pub fn peel_segment(key: &str) -> Option<&str> {
    key.rfind(|c: char| c == ':' || c == '/').map(|idx| &key[..idx])
}

/// Candidate registry keys for `normalized`, most specific first.
pub fn prefix_chain(normalized: &str) -> impl Iterator<Item = &str> {
    std::iter::successors(Some(normalized), |&current| peel_segment(current))
        .take_while(|candidate| !candidate.is_empty())
}
