//! Markdown documents with a leading YAML block delimited by `---` lines.

use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::sync::OnceLock;

const DELIMITER: &str = "---";
const EXCERPT_CHARS: usize = 150;

#[derive(Debug, Clone, Default)]
pub struct FrontMatter {
    pub data: Mapping,
    pub content: String,
}

/// Splits `raw` into its YAML header and Markdown body.
///
/// A file without an opening delimiter is all body. An unterminated header
/// swallows the rest of the file and leaves an empty body.
pub fn parse(raw: &str) -> Result<FrontMatter, serde_yaml::Error> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let first_line = raw.lines().next().unwrap_or_default();
    if !raw.starts_with(DELIMITER) || first_line.trim_end() != DELIMITER {
        return Ok(FrontMatter {
            data: Mapping::new(),
            content: raw.to_string(),
        });
    }

    let close_marker = "\n---";
    let (matter, content) = match raw[DELIMITER.len()..].find(close_marker) {
        Some(pos) => {
            let close = DELIMITER.len() + pos;
            let rest = &raw[close + close_marker.len()..];
            let rest = rest.strip_prefix('\r').unwrap_or(rest);
            let rest = rest.strip_prefix('\n').unwrap_or(rest);
            (&raw[DELIMITER.len()..close], rest)
        }
        None => (&raw[DELIMITER.len()..], ""),
    };

    let data = if matter.trim().is_empty() {
        Mapping::new()
    } else {
        match serde_yaml::from_str::<Value>(matter)? {
            Value::Mapping(map) => map,
            _ => Mapping::new(),
        }
    };

    Ok(FrontMatter {
        data,
        content: content.to_string(),
    })
}

impl FrontMatter {
    /// Scalar field rendered as text. Empty strings count as missing.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.data.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }

    pub fn text_or(&self, key: &str, default: &str) -> String {
        self.text(key).unwrap_or_else(|| default.to_string())
    }

    pub fn flag(&self, key: &str) -> bool {
        match self.data.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    pub fn integer(&self, key: &str) -> i64 {
        match self.data.get(key) {
            Some(Value::Number(n)) => n.as_i64().unwrap_or_default(),
            Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
            _ => 0,
        }
    }

    pub fn excerpt_or(&self, placeholder: &str) -> String {
        excerpt(&self.content).unwrap_or_else(|| placeholder.to_string())
    }
}

fn first_paragraph() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\n([^\n]+)").expect("static regex"))
}

/// First line that follows a blank line, cut to 150 characters plus `...`.
pub fn excerpt(body: &str) -> Option<String> {
    let captures = first_paragraph().captures(body)?;
    let paragraph = captures.get(1)?.as_str().trim();
    if paragraph.is_empty() {
        return None;
    }
    let cut: String = paragraph.chars().take(EXCERPT_CHARS).collect();
    Some(format!("{}...", cut))
}

/// Strips `.md` for use as a document id.
pub fn document_id(filename: &str) -> String {
    filename.strip_suffix(".md").unwrap_or(filename).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_header_and_body() {
        let doc = parse("---\ntitle: Road Works\nregion: Amhara\n---\nIntro\n\nDetails here").unwrap();
        assert_eq!(doc.text("title").as_deref(), Some("Road Works"));
        assert_eq!(doc.text("region").as_deref(), Some("Amhara"));
        assert_eq!(doc.content, "Intro\n\nDetails here");
    }

    #[test]
    fn file_without_header_is_all_body() {
        let doc = parse("# Heading\n\nText").unwrap();
        assert!(doc.data.is_empty());
        assert_eq!(doc.content, "# Heading\n\nText");
    }

    #[test]
    fn unterminated_header_leaves_empty_body() {
        let doc = parse("---\ntitle: Draft\n").unwrap();
        assert_eq!(doc.text("title").as_deref(), Some("Draft"));
        assert!(doc.content.is_empty());
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        assert!(parse("---\ntitle: [unclosed\n---\nbody").is_err());
    }

    #[test]
    fn scalar_helpers_coerce_types() {
        let doc = parse("---\ntender_no: 42\nfeatured: true\nviews: '7'\nempty: ''\n---\n").unwrap();
        assert_eq!(doc.integer("tender_no"), 42);
        assert_eq!(doc.integer("views"), 7);
        assert!(doc.flag("featured"));
        assert!(!doc.flag("missing"));
        assert_eq!(doc.text_or("empty", "N/A"), "N/A");
        assert_eq!(doc.text("tender_no").as_deref(), Some("42"));
    }

    #[test]
    fn excerpt_takes_first_line_after_blank_line() {
        assert_eq!(excerpt("Lead\n\nSecond paragraph\nmore").as_deref(), Some("Second paragraph..."));
        assert_eq!(excerpt("single line only"), None);
    }

    #[test]
    fn excerpt_truncates_to_150_chars() {
        let long = "ሀ".repeat(200);
        let got = excerpt(&format!("x\n\n{}", long)).unwrap();
        assert_eq!(got.chars().count(), 153);
        assert!(got.ends_with("..."));
    }

    #[test]
    fn document_id_drops_extension() {
        assert_eq!(document_id("bridge-2024.md"), "bridge-2024");
    }
}
