use std::path::Path;

use tracing::info;

use crate::errors::AppError;

/// Writes the rendered page to `path`, creating parent directories as needed.
pub async fn export_page(path: &Path, contents: &[u8]) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, contents).await?;
    info!("Exported {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_export_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dist").join("index.html");

        export_page(&path, b"<!DOCTYPE html>\n<p>hi</p>\n").await.unwrap();

        let written = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(written, "<!DOCTYPE html>\n<p>hi</p>\n");
    }

    #[tokio::test]
    async fn test_export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        tokio::fs::write(&path, "old").await.unwrap();

        export_page(&path, b"new").await.unwrap();

        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), "new");
    }

    #[tokio::test]
    async fn test_export_into_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        tokio::fs::write(&blocker, "x").await.unwrap();

        let err = export_page(&blocker.join("index.html"), b"page")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Export(_)));
    }
}
