use crate::link_store::Links;

/// Entries whose name contains `query`, case-sensitive. An empty query keeps
/// everything.
pub fn filter_by_key_substring(links: &Links, query: &str) -> Links {
    if query.is_empty() {
        return links.clone();
    }
    links
        .iter()
        .filter(|(name, _)| name.contains(query))
        .map(|(name, url)| (name.clone(), url.clone()))
        .collect()
}
