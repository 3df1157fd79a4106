//! Numbered image lookup

use std::ops::Range;
use std::path::Path;

use crate::error::{Error, Result};

/// Find the file for image `index` in `category_dir`
///
/// Tries `<index>.<ext>` for each extension in order and returns the file
/// name of the first one that exists.
pub fn find_image(category_dir: &Path, index: usize, extensions: &[String]) -> Option<String> {
    extensions
        .iter()
        .map(|ext| format!("{}.{}", index, ext))
        .find(|name| category_dir.join(name).is_file())
}

/// Resolve every image of a group, failing on the first gap
pub fn resolve_group(
    category: &str,
    category_dir: &Path,
    indices: Range<usize>,
    extensions: &[String],
) -> Result<Vec<String>> {
    indices
        .map(|index| {
            find_image(category_dir, index, extensions).ok_or_else(|| Error::MissingImage {
                category: category.to_string(),
                index,
            })
        })
        .collect()
}
