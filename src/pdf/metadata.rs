//! Inspection of the rendered report

use std::path::Path;
use lopdf::{Document, Object};
use crate::error::{Error, Result};

/// Read the Count field of the page tree root
fn page_tree_count(doc: &Document) -> Option<usize> {
    let catalog = doc.catalog().ok()?;
    let pages_id = match catalog.get(b"Pages").ok()? {
        Object::Reference(id) => *id,
        _ => return None,
    };
    let pages = doc.get_dictionary(pages_id).ok()?;
    match pages.get(b"Count").ok()? {
        Object::Integer(n) if *n >= 0 => Some(*n as usize),
        _ => None,
    }
}

/// Count the pages of a rendered report
///
/// Uses the page tree's Count field and falls back to walking the pages
/// when it is missing.
pub fn count_pages(path: &Path) -> Result<usize> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let doc = Document::load(path)?;
    let page_count = page_tree_count(&doc).unwrap_or_else(|| doc.get_pages().len());

    if page_count == 0 {
        return Err(Error::EmptyPdf(path.to_path_buf()));
    }

    Ok(page_count)
}
