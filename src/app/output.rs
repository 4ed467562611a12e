//! Writing rendered output.

use std::path::Path;

use anyhow::{Context, Result};

/// Writes `content` to `path`, creating missing parent directories.
pub async fn save_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write output file {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_to_file_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports").join("nested").join("out.json");
        save_to_file(&path, "[]").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_save_to_file_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        save_to_file(&path, "first").await.unwrap();
        save_to_file(&path, "second").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }
}
