//! Issuer entity ID templating.

/// Placeholder replaced by the request namespace.
pub const NAMESPACE_PLACEHOLDER: &str = "{namespace}";

/// Resolves the issuer entity ID for an optional tenant namespace.
///
/// A `{namespace}` placeholder in the template is substituted (with the empty
/// string when there is no namespace). Without a placeholder, a non-empty
/// namespace is appended as a path segment.
#[must_use]
pub fn entity_id(template: &str, namespace: Option<&str>) -> String {
    let namespace = namespace.map(str::trim).unwrap_or_default();

    if template.contains(NAMESPACE_PLACEHOLDER) {
        return template.replace(NAMESPACE_PLACEHOLDER, namespace);
    }
    if namespace.is_empty() {
        return template.to_string();
    }
    format!("{}/{}", template.trim_end_matches('/'), namespace)
}
