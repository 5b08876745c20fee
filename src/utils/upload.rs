use bytes::Bytes;
use rand::Rng;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::{Error, Result};

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "svg", "webp"];

/// Where an upload lands on disk and the public URL it is served from.
#[derive(Debug, Clone)]
pub struct UploadTarget {
    pub dir: PathBuf,
    pub url_prefix: &'static str,
    pub max_bytes: usize,
}

fn extension_of(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

fn check_image(filename: &str, data: &[u8]) -> Result<String> {
    let ext = extension_of(filename).unwrap_or_default();
    if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        return Err(Error::BadRequest(
            "Please upload a valid image file (jpg, jpeg, png, gif, svg, webp)".into(),
        ));
    }
    if (ext == "jpg" || ext == "jpeg") && !data.starts_with(&[0xFF, 0xD8]) {
        return Err(Error::BadRequest("Invalid JPEG file content".into()));
    }
    if ext == "png" && !data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        return Err(Error::BadRequest("Invalid PNG file content".into()));
    }
    Ok(ext)
}

pub fn generated_name(prefix: &str, ext: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
    format!("{}-{}-{}.{}", prefix, millis, suffix, ext)
}

/// Saves an uploaded image under a generated `<prefix>-<millis>-<random>.<ext>` name
/// and returns its public URL.
pub async fn save_image(
    target: &UploadTarget,
    prefix: &str,
    original_name: &str,
    data: &Bytes,
) -> Result<String> {
    if data.len() > target.max_bytes {
        return Err(Error::BadRequest(format!(
            "File {} exceeds the {} byte limit",
            original_name, target.max_bytes
        )));
    }
    let ext = check_image(original_name, data)?;

    fs::create_dir_all(&target.dir).await?;
    let name = generated_name(prefix, &ext);
    fs::write(target.dir.join(&name), data).await.map_err(|e| {
        tracing::error!("Failed to write upload {}: {}", name, e);
        Error::Internal(format!("Failed to save file: {}", e))
    })?;

    Ok(format!("{}/{}", target.url_prefix, name))
}

/// Replaces `path` in one step so readers never observe a half-written file.
pub async fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::Internal(format!("Invalid path {}", path.display())))?;
    let tmp = path.with_file_name(format!(".{}.{}.tmp", file_name, uuid::Uuid::new_v4()));
    fs::write(&tmp, contents).await?;
    if let Err(e) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    fn target(dir: &Path) -> UploadTarget {
        UploadTarget {
            dir: dir.to_path_buf(),
            url_prefix: "/api/uploads",
            max_bytes: 16,
        }
    }

    #[tokio::test]
    async fn saves_png_under_generated_name() {
        let dir = tempfile::tempdir().unwrap();
        let url = save_image(&target(dir.path()), "product", "photo.PNG", &Bytes::from_static(PNG))
            .await
            .unwrap();
        assert!(url.starts_with("/api/uploads/product-"));
        assert!(url.ends_with(".png"));
        let name = url.rsplit('/').next().unwrap();
        assert!(dir.path().join(name).exists());
    }

    #[tokio::test]
    async fn rejects_wrong_type_and_oversize() {
        let dir = tempfile::tempdir().unwrap();
        let t = target(dir.path());
        assert!(save_image(&t, "x", "doc.pdf", &Bytes::from_static(b"%PDF")).await.is_err());
        assert!(save_image(&t, "x", "fake.png", &Bytes::from_static(b"GIF89a")).await.is_err());
        let big = Bytes::from(vec![0u8; 32]);
        assert!(save_image(&t, "x", "big.gif", &big).await.is_err());
    }

    #[tokio::test]
    async fn atomic_write_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("ads.md");
        write_atomic(&path, b"first").await.unwrap();
        write_atomic(&path, b"second").await.unwrap();
        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), "second");
        let leftovers = std::fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(leftovers, 1);
    }
}
