//! Multipart plumbing for news image uploads.
//!
//! Stored filenames are random tokens plus the original extension, written
//! with `create_new` so a token collision surfaces as a retry instead of a
//! silent overwrite.

use std::path::Path;

use axum::body::Bytes;
use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("missing multipart field: {0}")]
    MissingField(&'static str),
    #[error("multipart decode error: {0}")]
    Multipart(#[from] MultipartError),
    #[error("upload io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parsed /addNews form: text fields plus the raw image payload.
#[derive(Debug)]
pub struct NewsUpload {
    pub heading: String,
    pub description: String,
    pub image_name: String,
    pub image_bytes: Bytes,
}

/// Drain the multipart stream into a [`NewsUpload`].
///
/// Unknown fields are ignored; each required field missing or empty fails
/// the whole upload.
pub async fn parse_news_upload(mut multipart: Multipart) -> Result<NewsUpload, UploadError> {
    let mut heading = None;
    let mut description = None;
    let mut image = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("newsHeading") => heading = Some(field.text().await?),
            Some("newsDescription") => description = Some(field.text().await?),
            Some("newsImage") => {
                let name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                image = Some((name, bytes));
            }
            _ => {}
        }
    }

    let heading = heading.filter(|s| !s.is_empty()).ok_or(UploadError::MissingField("newsHeading"))?;
    let description = description
        .filter(|s| !s.is_empty())
        .ok_or(UploadError::MissingField("newsDescription"))?;
    let (image_name, image_bytes) =
        image.filter(|(_, b)| !b.is_empty()).ok_or(UploadError::MissingField("newsImage"))?;

    Ok(NewsUpload { heading, description, image_name, image_bytes })
}

/// Write the image under `dir` and return the generated filename.
pub async fn store_image(
    dir: &Path,
    original_name: &str,
    bytes: &[u8],
) -> Result<String, UploadError> {
    tokio::fs::create_dir_all(dir).await?;

    let ext = sanitized_extension(original_name);

    // create_new is the uniqueness check; a colliding token just retries.
    for _ in 0..3 {
        let filename = generated_filename(&ext);
        let path = dir.join(&filename);
        match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(mut file) => {
                file.write_all(bytes).await?;
                file.flush().await?;
                return Ok(filename);
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Err(UploadError::Io(std::io::Error::new(
        std::io::ErrorKind::AlreadyExists,
        "could not generate a unique upload filename",
    )))
}

fn generated_filename(ext: &str) -> String {
    if ext.is_empty() {
        Uuid::new_v4().simple().to_string()
    } else {
        format!("{}.{}", Uuid::new_v4().simple(), ext)
    }
}

/// Extension of the client-supplied name, lowercased and stripped down to
/// alphanumerics. The rest of the original name never touches disk.
fn sanitized_extension(original_name: &str) -> String {
    Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            e.chars()
                .filter(char::is_ascii_alphanumeric)
                .collect::<String>()
                .to_ascii_lowercase()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_sanitized() {
        assert_eq!(sanitized_extension("photo.PNG"), "png");
        assert_eq!(sanitized_extension("report.final.JpEg"), "jpeg");
        assert_eq!(sanitized_extension("no-extension"), "");
        assert_eq!(sanitized_extension("../../etc/passwd"), "");
        assert_eq!(sanitized_extension("weird.p?n*g"), "png");
    }

    #[test]
    fn generated_names_are_distinct() {
        let a = generated_filename("png");
        let b = generated_filename("png");
        assert_ne!(a, b);
        assert!(a.ends_with(".png"));
        assert_eq!(generated_filename("").contains('.'), false);
    }

    #[tokio::test]
    async fn store_image_writes_under_generated_name() {
        let dir = tempfile::tempdir().unwrap();
        let name = store_image(dir.path(), "banner.PNG", b"not really a png").await.unwrap();
        assert!(name.ends_with(".png"));
        let written = tokio::fs::read(dir.path().join(&name)).await.unwrap();
        assert_eq!(written, b"not really a png");
    }

    #[tokio::test]
    async fn repeated_stores_never_collide() {
        let dir = tempfile::tempdir().unwrap();
        let a = store_image(dir.path(), "x.jpg", b"a").await.unwrap();
        let b = store_image(dir.path(), "x.jpg", b"b").await.unwrap();
        assert_ne!(a, b);
    }
}
