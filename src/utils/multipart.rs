use std::collections::HashMap;

use axum::extract::Multipart;
use bytes::Bytes;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub field: String,
    pub file_name: String,
    pub data: Bytes,
}

/// A multipart body split into text fields and file parts.
#[derive(Debug, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
    files: Vec<UploadedFile>,
}

impl FormData {
    pub async fn read(mut multipart: Multipart) -> Result<Self> {
        let mut form = FormData::default();
        while let Some(field) = multipart.next_field().await.map_err(|e| {
            tracing::warn!("Failed to read multipart field: {}", e);
            Error::BadRequest(format!("Invalid multipart body: {}", e))
        })? {
            let name = field.name().unwrap_or_default().to_string();
            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let data = field.bytes().await?;
                    if data.is_empty() && file_name.is_empty() {
                        continue;
                    }
                    form.files.push(UploadedFile {
                        field: name,
                        file_name,
                        data,
                    });
                }
                None => {
                    let value = field.text().await?;
                    form.fields.insert(name, value);
                }
            }
        }
        Ok(form)
    }

    pub fn text(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    /// Text field with surrounding whitespace removed; blank counts as absent.
    pub fn non_empty(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    pub fn files<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a UploadedFile> + 'a {
        self.files.iter().filter(move |f| f.field == field)
    }

    pub fn file(&self, field: &str) -> Option<&UploadedFile> {
        self.files.iter().find(|f| f.field == field)
    }

    #[cfg(test)]
    pub(crate) fn with_fields(fields: &[(&str, &str)]) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            files: Vec::new(),
        }
    }
}

/// Price text from a form: absent or blank is zero, anything else must parse.
pub fn parse_price(raw: Option<&str>) -> Result<f64> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(0.0),
        Some(s) => s
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| Error::BadRequest("Invalid price format".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_absent() {
        let form = FormData::with_fields(&[("name", "  "), ("unit", "bag")]);
        assert_eq!(form.non_empty("name"), None);
        assert_eq!(form.text("name").as_deref(), Some("  "));
        assert_eq!(form.non_empty("unit").as_deref(), Some("bag"));
    }

    #[test]
    fn files_are_selected_by_field() {
        let upload = |field: &str, name: &str| UploadedFile {
            field: field.to_string(),
            file_name: name.to_string(),
            data: Bytes::from_static(b"x"),
        };
        let form = FormData {
            fields: HashMap::new(),
            files: vec![
                upload("productImages", "a.png"),
                upload("companyLogo", "logo.png"),
                upload("productImages", "b.png"),
            ],
        };
        let field = String::from("productImages");
        let names: Vec<&str> = form.files(&field).map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "b.png"]);
        assert_eq!(form.file("companyLogo").map(|f| f.file_name.as_str()), Some("logo.png"));
        assert!(form.file("banner").is_none());
    }

    #[test]
    fn price_parsing() {
        assert_eq!(parse_price(None).unwrap(), 0.0);
        assert_eq!(parse_price(Some("")).unwrap(), 0.0);
        assert_eq!(parse_price(Some(" 850.5 ")).unwrap(), 850.5);
        assert!(parse_price(Some("cheap")).is_err());
        assert!(parse_price(Some("NaN")).is_err());
    }
}
