// src/document.rs
//! Resume loading: raw text plus the link annotations a PDF carries

use anyhow::{Context, Result};
use lopdf::{Document, Object};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::core::FsOps;
use crate::utils::normalize_extracted_text;

#[derive(Debug, Clone, Default)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub text: String,
    /// URI targets of link annotations (PDF only)
    pub annotation_links: Vec<String>,
}

impl SourceDocument {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Load a resume from disk. PDFs go through `pdf-extract`, text and markdown
/// files are read as UTF-8.
pub fn load_document(path: &Path) -> Result<SourceDocument> {
    if !path.exists() {
        anyhow::bail!("Resume file not found: {}", path.display());
    }

    let document = match FsOps::get_extension(path).as_deref() {
        Some("pdf") => load_pdf(path)?,
        Some("txt") | Some("md") => {
            let text = FsOps::read_file_safe(path)?;
            SourceDocument {
                path: path.to_path_buf(),
                text: normalize_extracted_text(&text),
                annotation_links: Vec::new(),
            }
        }
        Some(ext) => anyhow::bail!(
            "Unsupported resume extension: {}. Allowed: {:?}",
            ext,
            crate::core::fs_ops::RESUME_EXTENSIONS
        ),
        None => anyhow::bail!("Resume file has no extension: {}", path.display()),
    };

    if document.is_blank() {
        warn!("No text extracted from {}", path.display());
    }

    Ok(document)
}

fn load_pdf(path: &Path) -> Result<SourceDocument> {
    let bytes = FsOps::read_bytes_safe(path)?;
    FsOps::validate_pdf_header(&bytes, path)?;

    let raw = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
        anyhow::anyhow!("Failed to extract text from PDF '{}': {}", path.display(), e)
    })?;
    let text = normalize_extracted_text(&raw);
    info!(
        "Extracted {} characters from {}",
        text.chars().count(),
        path.display()
    );

    let annotation_links = match collect_link_annotations(&bytes) {
        Ok(links) => {
            debug!("Found {} link annotations", links.len());
            links
        }
        Err(e) => {
            warn!("Could not read link annotations from {}: {:#}", path.display(), e);
            Vec::new()
        }
    };

    Ok(SourceDocument {
        path: path.to_path_buf(),
        text,
        annotation_links,
    })
}

/// URI targets of every `/Link` annotation, in page order
pub fn collect_link_annotations(bytes: &[u8]) -> Result<Vec<String>> {
    let doc = Document::load_mem(bytes).context("Failed to parse PDF structure")?;
    let mut links = Vec::new();

    for (page_number, page_id) in doc.get_pages() {
        let page = doc
            .get_dictionary(page_id)
            .with_context(|| format!("Failed to read page {}", page_number))?;

        let annots = match page.get(b"Annots") {
            Ok(annots) => resolve(&doc, annots)?,
            Err(_) => continue,
        };
        let annots = match annots.as_array() {
            Ok(array) => array,
            Err(_) => continue,
        };

        for annot in annots {
            if let Some(uri) = link_uri(&doc, annot) {
                links.push(uri);
            }
        }
    }

    Ok(links)
}

fn link_uri(doc: &Document, annot: &Object) -> Option<String> {
    let dict = resolve(doc, annot).ok()?.as_dict().ok()?;

    let subtype = dict.get(b"Subtype").ok()?.as_name().ok()?;
    if subtype != b"Link" {
        return None;
    }

    let action = resolve(doc, dict.get(b"A").ok()?).ok()?.as_dict().ok()?;
    let uri = resolve(doc, action.get(b"URI").ok()?).ok()?.as_str().ok()?;

    let uri = String::from_utf8_lossy(uri).trim().to_string();
    if uri.is_empty() {
        None
    } else {
        Some(uri)
    }
}

fn resolve<'a>(doc: &'a Document, object: &'a Object) -> Result<&'a Object> {
    match object {
        Object::Reference(id) => doc
            .get_object(*id)
            .with_context(|| format!("Dangling object reference {:?}", id)),
        other => Ok(other),
    }
}
