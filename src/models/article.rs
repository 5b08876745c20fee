use serde::{Deserialize, Serialize};

use crate::utils::front_matter::{document_id, FrontMatter};

pub const UNTITLED_ARTICLE: &str = "Untitled Article";
pub const ARTICLE_EXCERPT_PLACEHOLDER: &str = "Click to view full article.";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    #[serde(rename = "published_date")]
    pub published_date: String,
    pub author: String,
    pub file_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "read_time", skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
    pub featured: bool,
    pub views: i64,
}

impl Article {
    pub fn from_document(filename: &str, doc: FrontMatter) -> Self {
        let id = document_id(filename);
        Self {
            title: doc.text_or("title", UNTITLED_ARTICLE),
            slug: doc.text("slug").unwrap_or_else(|| id.clone()),
            excerpt: doc.excerpt_or(ARTICLE_EXCERPT_PLACEHOLDER),
            category: doc.text_or("category", "General"),
            published_date: doc.text_or("published_date", "N/A"),
            author: doc.text_or("author", "Admin"),
            file_type: "md".to_string(),
            image: doc.text("image"),
            read_time: doc.text("read_time"),
            featured: doc.flag("featured"),
            views: doc.integer("views"),
            id,
            content: doc.content,
        }
    }

    pub fn searchable_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.title, self.category, self.excerpt, self.content, self.author
        )
        .to_lowercase()
    }
}
