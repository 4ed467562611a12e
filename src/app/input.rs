//! Reading IP lists from files.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Reads one IP per line from `path`.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
/// Validation happens later, so malformed entries are returned as-is.
pub async fn read_ip_file(path: &Path) -> Result<Vec<String>> {
    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("Failed to open input file {}", path.display()))?;

    let mut lines = BufReader::new(file).lines();
    let mut ips = Vec::new();
    while let Some(line) = lines
        .next_line()
        .await
        .with_context(|| format!("Failed to read input file {}", path.display()))?
    {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        ips.push(line.to_string());
    }
    Ok(ips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_read_ip_file_skips_blanks_and_comments() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "# resolvers").unwrap();
        writeln!(file, "8.8.8.8").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "   1.1.1.1   ").unwrap();
        writeln!(file, "\t").unwrap();
        write!(file, "bogus").unwrap();

        let ips = read_ip_file(file.path()).await.unwrap();
        assert_eq!(ips, vec!["8.8.8.8", "1.1.1.1", "bogus"]);
    }

    #[tokio::test]
    async fn test_read_ip_file_missing() {
        let err = read_ip_file(Path::new("/nonexistent/ips.txt"))
            .await
            .unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to open input file"));
    }
}
