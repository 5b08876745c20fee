use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

use crate::error::{Error, Result};
use crate::models::{article::Article, tender::Tender};
use crate::utils::front_matter::{self, FrontMatter};
use crate::utils::upload::write_atomic;
use crate::utils::validation::validate_markdown_filename;

/// A directory of Markdown documents, re-read from disk on every call.
#[derive(Clone, Debug)]
pub struct MarkdownStore {
    dir: PathBuf,
    label: &'static str,
}

impl MarkdownStore {
    pub fn new(dir: impl Into<PathBuf>, label: &'static str) -> Self {
        Self {
            dir: dir.into(),
            label,
        }
    }

    /// `.md` files, skipping editor lock files (`~$...`), sorted by name.
    pub async fn list_filenames(&self) -> Result<Vec<String>> {
        let mut entries = fs::read_dir(&self.dir).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if name.ends_with(".md") && !name.starts_with("~$") {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    pub async fn read_raw(&self, filename: &str) -> Result<String> {
        validate_markdown_filename(filename)?;
        match fs::read_to_string(self.dir.join(filename)).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(Error::NotFound(format!("{} file not found", self.label)))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn write(&self, filename: &str, content: &str) -> Result<()> {
        validate_markdown_filename(filename)?;
        write_atomic(&self.dir.join(filename.trim()), content.as_bytes()).await?;
        tracing::info!(collection = self.label, filename, "markdown document written");
        Ok(())
    }

    /// Parses every document in the collection.
    pub async fn load_documents(&self) -> Result<Vec<(String, FrontMatter)>> {
        let mut docs = Vec::new();
        for filename in self.list_filenames().await? {
            let raw = fs::read_to_string(self.dir.join(&filename)).await?;
            let parsed = front_matter::parse(&raw).map_err(|e| {
                tracing::error!(collection = self.label, %filename, "front matter parse failed: {}", e);
                Error::Yaml(e)
            })?;
            docs.push((filename, parsed));
        }
        Ok(docs)
    }
}

#[derive(Clone, Debug)]
pub struct TenderStore {
    pub store: MarkdownStore,
}

impl TenderStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            store: MarkdownStore::new(dir, "Tender"),
        }
    }

    pub async fn load_all(&self) -> Result<Vec<Tender>> {
        let docs = self.store.load_documents().await?;
        Ok(docs
            .into_iter()
            .map(|(filename, doc)| Tender::from_document(&filename, doc))
            .collect())
    }

    /// Tenders whose searchable text contains `query` (case-insensitive).
    pub async fn search(&self, query: &str) -> Result<Vec<Tender>> {
        let needle = query.to_lowercase();
        let tenders = self.load_all().await?;
        Ok(tenders
            .into_iter()
            .filter(|t| t.searchable_text().contains(&needle))
            .collect())
    }
}

#[derive(Clone, Debug)]
pub struct ArticleStore {
    pub store: MarkdownStore,
}

impl ArticleStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            store: MarkdownStore::new(dir, "Article"),
        }
    }

    pub async fn load_all(&self) -> Result<Vec<Article>> {
        let docs = self.store.load_documents().await?;
        Ok(docs
            .into_iter()
            .map(|(filename, doc)| Article::from_document(&filename, doc))
            .collect())
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Article>> {
        let needle = query.to_lowercase();
        let articles = self.load_all().await?;
        Ok(articles
            .into_iter()
            .filter(|a| a.searchable_text().contains(&needle))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_only_markdown_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.md", "a.md", "~$lock.md", "notes.txt"] {
            std::fs::write(dir.path().join(name), "x").unwrap();
        }
        let store = MarkdownStore::new(dir.path(), "Article");
        assert_eq!(store.list_filenames().await.unwrap(), vec!["a.md", "b.md"]);
    }

    #[tokio::test]
    async fn missing_document_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = MarkdownStore::new(dir.path(), "Tender");
        let err = store.read_raw("nope.md").await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn tender_search_matches_body_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let tenders = TenderStore::new(dir.path());
        tenders
            .store
            .write("road.md", "---\ncategory: Roads\n---\nAsphalt RESURFACING of ring road")
            .await
            .unwrap();
        tenders
            .store
            .write("school.md", "---\ncategory: Buildings\n---\nNew school block")
            .await
            .unwrap();

        let hits = tenders.search("resurfacing").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "road");
        assert_eq!(tenders.search("").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn broken_front_matter_fails_the_scan() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.md"), "---\ntitle: [oops\n---\n").unwrap();
        let articles = ArticleStore::new(dir.path());
        assert!(articles.search("x").await.is_err());
    }
}
