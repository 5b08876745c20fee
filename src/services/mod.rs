pub mod ad_service;
pub mod catalog_service;
pub mod company_service;
pub mod content_service;
pub mod item_service;
pub mod job_service;
pub mod rfq_service;
pub mod search_service;
pub mod seed_service;
pub mod user_service;

/// Case-insensitive substring match of `query` against any of `fields`.
/// Folding uses Unicode lowercase on both sides, like the Markdown collections.
pub(crate) fn matches_query(query: &str, fields: &[Option<&str>]) -> bool {
    let needle = query.to_lowercase();
    fields
        .iter()
        .flatten()
        .any(|value| value.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::matches_query;

    #[test]
    fn matches_any_field_ignoring_case() {
        assert!(matches_query("cement", &[Some("Portland CEMENT"), None]));
        assert!(matches_query("étanchéité", &[None, Some("ÉTANCHÉITÉ Systems")]));
        assert!(matches_query("50%_off", &[Some("Tiles 50%_OFF")]));
        assert!(!matches_query("50%", &[Some("Tiles 50 off")]));
        assert!(matches_query("", &[Some("anything")]));
        assert!(!matches_query("steel", &[None, Some("wood")]));
    }
}
