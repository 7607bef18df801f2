// src/core/fs_ops.rs
//! File system helpers shared by the loader, the config manager and batch mode

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const RESUME_EXTENSIONS: [&str; 3] = ["pdf", "txt", "md"];

const PDF_SIGNATURE: &[u8] = b"%PDF-";

pub struct FsOps;

impl FsOps {
    /// Ensure directory exists
    pub fn ensure_dir_exists(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            info!("Created directory: {}", path.display());
        }
        Ok(())
    }

    pub fn read_file_safe(path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    pub fn read_bytes_safe(path: &Path) -> Result<Vec<u8>> {
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Get file extension in lowercase
    pub fn get_extension(path: &Path) -> Option<String> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
    }

    pub fn is_resume_file(path: &Path) -> bool {
        path.is_file()
            && Self::get_extension(path)
                .map(|ext| RESUME_EXTENSIONS.contains(&ext.as_str()))
                .unwrap_or(false)
    }

    /// List resume files (pdf, txt, md) directly inside `dir`, sorted by path
    pub fn list_resume_files(dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            anyhow::bail!("Not a directory: {}", dir.display());
        }

        let entries =
            fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();
            if Self::is_resume_file(&path) {
                files.push(path);
            } else {
                debug!("Skipping non-resume entry: {}", path.display());
            }
        }

        files.sort();
        Ok(files)
    }

    /// Reject files that do not start with the PDF signature
    pub fn validate_pdf_header(bytes: &[u8], path: &Path) -> Result<()> {
        if bytes.is_empty() {
            anyhow::bail!("PDF file is empty: {}", path.display());
        }
        // Some producers emit a few bytes of junk before the header
        let window = &bytes[..bytes.len().min(1024)];
        if !window
            .windows(PDF_SIGNATURE.len())
            .any(|w| w == PDF_SIGNATURE)
        {
            anyhow::bail!("Not a PDF file (missing %PDF- header): {}", path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_extension() {
        assert_eq!(
            FsOps::get_extension(Path::new("resume.PDF")),
            Some("pdf".to_string())
        );
        assert_eq!(FsOps::get_extension(Path::new("noext")), None);
    }

    #[test]
    fn test_list_resume_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.pdf"), "%PDF-1.4").unwrap();
        fs::write(dir.path().join("notes.docx"), "x").unwrap();
        fs::create_dir(dir.path().join("nested.pdf")).unwrap();

        let files = FsOps::list_resume_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.pdf", "b.txt"]);
    }

    #[test]
    fn test_list_resume_files_requires_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FsOps::list_resume_files(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_validate_pdf_header() {
        let path = Path::new("x.pdf");
        assert!(FsOps::validate_pdf_header(b"%PDF-1.7\n...", path).is_ok());
        assert!(FsOps::validate_pdf_header(b"\n\n%PDF-1.4", path).is_ok());
        assert!(FsOps::validate_pdf_header(b"PK\x03\x04", path).is_err());
        assert!(FsOps::validate_pdf_header(b"", path).is_err());
    }

    #[test]
    fn test_ensure_dir_exists_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("reports");
        FsOps::ensure_dir_exists(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
