//! Per-category image counting

use std::fmt;
use std::path::Path;

use glob::{glob_with, MatchOptions, Pattern};
use log::{debug, warn};

use crate::config::ReportConfig;
use crate::error::Result;

/// How a category directory is searched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountPolicy {
    /// Walk nested directories and accept every counting extension
    Recursive,
    /// Look at the directory itself and accept only the report extensions
    Flat,
}

impl CountPolicy {
    fn extensions<'a>(&self, config: &'a ReportConfig) -> &'a [String] {
        match self {
            CountPolicy::Recursive => &config.count_extensions,
            CountPolicy::Flat => &config.report_extensions,
        }
    }
}

/// Image counts in category order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCounts {
    entries: Vec<(String, usize)>,
}

impl ImageCounts {
    /// Count for a category directory, if it is part of the configuration
    pub fn get(&self, dir: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(name, _)| name == dir)
            .map(|(_, count)| *count)
    }

    /// Sum over all categories
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for ImageCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, count) in &self.entries {
            writeln!(f, "{}: {}", name, count)?;
        }
        Ok(())
    }
}

/// Count the images of every configured category below `root`
///
/// A missing category directory counts as zero.
pub fn count_images(root: &Path, config: &ReportConfig, policy: CountPolicy) -> Result<ImageCounts> {
    let mut entries = Vec::with_capacity(config.categories.len());

    for category in &config.categories {
        let dir = root.join(&category.dir);
        let count = if dir.is_dir() {
            count_in_directory(&dir, policy.extensions(config), policy)?
        } else {
            debug!("No directory for category {}", category.dir);
            0
        };
        entries.push((category.dir.clone(), count));
    }

    Ok(ImageCounts { entries })
}

/// Count image files in one directory
///
/// Extensions are matched case-insensitively; only regular files count.
pub fn count_in_directory(dir: &Path, extensions: &[String], policy: CountPolicy) -> Result<usize> {
    let options = MatchOptions {
        case_sensitive: false,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let base = Pattern::escape(&dir.to_string_lossy());
    let mut count = 0;

    for ext in extensions {
        let pattern = match policy {
            CountPolicy::Recursive => format!("{}/**/*.{}", base, Pattern::escape(ext)),
            CountPolicy::Flat => format!("{}/*.{}", base, Pattern::escape(ext)),
        };

        for entry in glob_with(&pattern, options)? {
            match entry {
                Ok(path) if path.is_file() => count += 1,
                Ok(_) => {}
                Err(e) => warn!("Skipping unreadable entry in {}: {}", dir.display(), e),
            }
        }
    }

    Ok(count)
}
