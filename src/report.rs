//! Report pipeline: count, lay out, render, write

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::config::ReportConfig;
use crate::counter::{count_images, CountPolicy};
use crate::date::ReportDate;
use crate::error::{Error, Result};
use crate::layout::layout_category;
use crate::tex::{assemble, preamble, render_section};

/// Summary of one emitted section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSummary {
    pub dir: String,
    pub images: usize,
    pub blocks: usize,
}

/// A generated report
#[derive(Debug)]
pub struct Report {
    /// Complete document markup
    pub tex: String,
    /// Emitted sections in document order
    pub sections: Vec<SectionSummary>,
    /// Categories whose layout stopped early
    pub failures: Vec<Error>,
}

impl Report {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Build the report markup for the folder at `root`
///
/// Categories are visited in configuration order. A category without images
/// produces no section; a category with a missing image keeps the blocks
/// laid out before the gap and its error is collected in `failures`.
pub fn build_report(root: &Path, date: &ReportDate, config: &ReportConfig) -> Result<Report> {
    let counts = count_images(root, config, CountPolicy::Flat)?;
    let formatted_date = date.localize(config);

    let mut sections = Vec::new();
    let mut rendered = Vec::new();
    let mut failures = Vec::new();

    for category in &config.categories {
        let count = counts.get(&category.dir).unwrap_or(0);
        if count == 0 {
            continue;
        }

        let layout = layout_category(
            &category.dir,
            &category.title,
            &root.join(&category.dir),
            count,
            &config.report_extensions,
        );

        if !layout.blocks.is_empty() {
            info!(
                "Section {}: {} images in {} blocks",
                layout.dir,
                layout.image_count(),
                layout.blocks.len()
            );
            rendered.push(render_section(&layout, config));
            sections.push(SectionSummary {
                dir: layout.dir.clone(),
                images: layout.image_count(),
                blocks: layout.blocks.len(),
            });
        } else {
            warn!("Section {} omitted: no complete block", layout.dir);
        }

        if let Some(e) = layout.error {
            failures.push(e);
        }
    }

    let tex = assemble(&preamble(config, &formatted_date), rendered);

    Ok(Report {
        tex,
        sections,
        failures,
    })
}

/// Path of the markup file for a report date
pub fn tex_path(root: &Path, date: &ReportDate) -> PathBuf {
    root.join(format!("{}_report.tex", date.stem()))
}

/// Path of the rendered PDF for a report date
pub fn pdf_path(root: &Path, date: &ReportDate) -> PathBuf {
    root.join(format!("{}_report.pdf", date.stem()))
}

/// Write the report markup as UTF-8 and return its path
pub fn write_report(root: &Path, date: &ReportDate, report: &Report) -> Result<PathBuf> {
    let path = tex_path(root, date);
    fs::write(&path, &report.tex)?;
    info!("LaTeX code generated and saved to {}", path.display());
    Ok(path)
}
