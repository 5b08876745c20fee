use serde::{Deserialize, Serialize};

use crate::utils::front_matter::{document_id, FrontMatter};

pub const UNTITLED_TENDER: &str = "Untitled Tender";
pub const TENDER_EXCERPT_PLACEHOLDER: &str = "Click to view full tender document.";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tender {
    pub id: String,
    pub tender_no: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub published_on: String,
    pub bid_closing_date: String,
    pub bid_opening_date: String,
    pub region: String,
    pub featured: bool,
}

impl Tender {
    pub fn from_document(filename: &str, doc: FrontMatter) -> Self {
        let id = document_id(filename);
        let title = doc
            .text("title")
            .or_else(|| doc.text("closing"))
            .unwrap_or_else(|| UNTITLED_TENDER.to_string());
        Self {
            tender_no: doc.integer("tender_no"),
            title,
            slug: doc.text("slug").unwrap_or_else(|| id.clone()),
            excerpt: doc.excerpt_or(TENDER_EXCERPT_PLACEHOLDER),
            category: doc.text_or("category", "General"),
            published_on: doc.text_or("published", "N/A"),
            bid_closing_date: doc.text_or("closing", "N/A"),
            bid_opening_date: doc.text_or("opening", "N/A"),
            region: doc.text_or("region", "N/A"),
            featured: doc.flag("featured"),
            id,
            content: doc.content,
        }
    }

    /// Lowercased haystack the search filter matches against.
    pub fn searchable_text(&self) -> String {
        format!(
            "{} {} {} {} {} {} {}",
            self.title,
            self.category,
            self.excerpt,
            self.content,
            self.region,
            self.bid_closing_date,
            self.bid_opening_date
        )
        .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::front_matter::parse;

    #[test]
    fn missing_fields_fall_back_to_placeholders() {
        let tender = Tender::from_document("t1.md", parse("no header").unwrap());
        assert_eq!(tender.id, "t1");
        assert_eq!(tender.title, UNTITLED_TENDER);
        assert_eq!(tender.category, "General");
        assert_eq!(tender.region, "N/A");
        assert_eq!(tender.bid_closing_date, "N/A");
        assert_eq!(tender.excerpt, TENDER_EXCERPT_PLACEHOLDER);
        assert!(!tender.featured);
        assert_eq!(tender.tender_no, 0);
    }

    #[test]
    fn title_falls_back_to_closing_date() {
        let raw = "---\nclosing: 2025-03-01\nregion: Oromia\n---\nbody";
        let tender = Tender::from_document("t2.md", parse(raw).unwrap());
        assert_eq!(tender.title, "2025-03-01");
        assert!(tender.searchable_text().contains("oromia"));
    }
}
