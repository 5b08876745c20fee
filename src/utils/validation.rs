use crate::error::{Error, Result};

/// Markdown collection entries are addressed by bare `.md` filenames only.
pub fn validate_markdown_filename(filename: &str) -> Result<()> {
    let trimmed = filename.trim();
    if trimmed.is_empty() {
        return Err(Error::BadRequest("Filename is required".into()));
    }
    if trimmed.contains('/') || trimmed.contains('\\') || trimmed.contains("..") {
        return Err(Error::BadRequest("Invalid filename".into()));
    }
    if !trimmed.ends_with(".md") {
        return Err(Error::BadRequest("Please upload a Markdown file".into()));
    }
    Ok(())
}

pub fn require_unit(unit: Option<&str>) -> Result<String> {
    match unit.map(str::trim) {
        Some(u) if crate::models::item::is_allowed_unit(u) => Ok(u.to_string()),
        Some(u) if !u.is_empty() => Err(Error::BadRequest(format!("Invalid unit: {}", u))),
        _ => Err(Error::BadRequest("Unit is required".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_filenames() {
        assert!(validate_markdown_filename("tender-12.md").is_ok());
        assert!(validate_markdown_filename("../secrets.md").is_err());
        assert!(validate_markdown_filename("sub/dir.md").is_err());
        assert!(validate_markdown_filename("notes.txt").is_err());
        assert!(validate_markdown_filename("").is_err());
    }

    #[test]
    fn units() {
        assert_eq!(require_unit(Some("bag")).unwrap(), "bag");
        assert!(require_unit(Some("barrel")).is_err());
        assert!(require_unit(None).is_err());
    }
}
