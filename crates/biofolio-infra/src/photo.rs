//! Photo upload: reading an image file into memory for a submission.
//!
//! The file is read once at submission time. Only configured extensions are
//! accepted and files above the configured size limit are refused before
//! being read.

use std::fmt;
use std::path::Path;

use biofolio_types::config::GlobalConfig;
use biofolio_types::error::PhotoError;

/// Image formats recognised from their leading magic bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoFormat {
    Jpeg,
    Png,
    Unknown,
}

impl PhotoFormat {
    /// Detect the format of raw image bytes.
    pub fn sniff(bytes: &[u8]) -> Self {
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            PhotoFormat::Jpeg
        } else if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            PhotoFormat::Png
        } else {
            PhotoFormat::Unknown
        }
    }
}

impl fmt::Display for PhotoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoFormat::Jpeg => write!(f, "jpeg"),
            PhotoFormat::Png => write!(f, "png"),
            PhotoFormat::Unknown => write!(f, "unknown"),
        }
    }
}

/// Check that `path` has one of the configured photo extensions.
pub fn check_extension(path: &Path, config: &GlobalConfig) -> Result<(), PhotoError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_lowercase();

    let allowed = config
        .photo_extensions
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(&extension));

    if allowed {
        Ok(())
    } else {
        Err(PhotoError::UnsupportedExtension(
            extension,
            config.photo_extensions.join(", "),
        ))
    }
}

/// Read the photo at `path` into memory.
pub async fn load_photo(path: &Path, config: &GlobalConfig) -> Result<Vec<u8>, PhotoError> {
    check_extension(path, config)?;

    let size = tokio::fs::metadata(path).await?.len();
    if size > config.max_photo_bytes {
        return Err(PhotoError::TooLarge {
            size,
            limit: config.max_photo_bytes,
        });
    }

    let bytes = tokio::fs::read(path).await?;
    tracing::debug!(
        path = %path.display(),
        size = bytes.len(),
        format = %PhotoFormat::sniff(&bytes),
        "photo loaded"
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_sniff_formats() {
        assert_eq!(PhotoFormat::sniff(&[0xFF, 0xD8, 0xFF, 0xE0]), PhotoFormat::Jpeg);
        assert_eq!(PhotoFormat::sniff(&PNG_HEADER), PhotoFormat::Png);
        assert_eq!(PhotoFormat::sniff(b"GIF89a"), PhotoFormat::Unknown);
        assert_eq!(PhotoFormat::sniff(&[]), PhotoFormat::Unknown);
    }

    #[test]
    fn test_check_extension_is_case_insensitive() {
        let config = GlobalConfig::default();
        assert!(check_extension(Path::new("me.JPG"), &config).is_ok());
        assert!(check_extension(Path::new("me.jpeg"), &config).is_ok());
        assert!(check_extension(Path::new("dir/me.Png"), &config).is_ok());
    }

    #[test]
    fn test_check_extension_rejects_others() {
        let config = GlobalConfig::default();
        let err = check_extension(Path::new("me.gif"), &config).unwrap_err();
        assert!(matches!(err, PhotoError::UnsupportedExtension(ref ext, _) if ext == "gif"));
        assert!(check_extension(Path::new("no_extension"), &config).is_err());
    }

    #[tokio::test]
    async fn test_load_photo_reads_bytes() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("me.png");
        tokio::fs::write(&path, PNG_HEADER).await.unwrap();

        let bytes = load_photo(&path, &GlobalConfig::default()).await.unwrap();
        assert_eq!(bytes, PNG_HEADER.to_vec());
        assert_eq!(PhotoFormat::sniff(&bytes), PhotoFormat::Png);
    }

    #[tokio::test]
    async fn test_load_photo_enforces_size_limit() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("big.jpg");
        tokio::fs::write(&path, vec![0u8; 64]).await.unwrap();

        let config = GlobalConfig {
            max_photo_bytes: 32,
            ..GlobalConfig::default()
        };
        let err = load_photo(&path, &config).await.unwrap_err();
        assert!(matches!(err, PhotoError::TooLarge { size: 64, limit: 32 }));
    }

    #[tokio::test]
    async fn test_load_photo_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = load_photo(&tmp.path().join("missing.jpg"), &GlobalConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, PhotoError::Io(_)));
    }
}
