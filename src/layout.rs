//! Block layout calculations
//!
//! A category's images are cut into consecutive groups of at most four and
//! every group is drawn with the grid template that fits its size.

use std::path::Path;

use log::warn;

use crate::error::{Error, Result};
use crate::images::resolve_group;

/// Largest number of images in one block
pub const MAX_GROUP_SIZE: usize = 4;

/// Simple length type in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length(pub f64);

impl Length {
    /// Create a length from millimeters
    pub fn from_mm(mm: f64) -> Self {
        Length(mm)
    }

    /// Create a length from centimeters
    pub fn from_cm(cm: f64) -> Self {
        Length(cm * 10.0)
    }

    /// Get the value in millimeters
    pub fn mm(&self) -> f64 {
        self.0
    }

    /// Get the value in centimeters
    pub fn cm(&self) -> f64 {
        self.0 / 10.0
    }
}

/// Width of a side-by-side slot, as a fraction of the text width
pub const HALF_WIDTH: f64 = 0.45;

/// Width of a slot that has a row to itself
pub const FULL_WIDTH: f64 = 0.7;

/// A run of consecutive image numbers (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    pub start: usize,
    pub size: usize,
}

impl Group {
    /// Image numbers covered by this group
    pub fn indices(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.size
    }
}

/// Split images `1..=count` into groups of four; the last takes the rest
pub fn plan_groups(count: usize) -> Vec<Group> {
    (1..=count)
        .step_by(MAX_GROUP_SIZE)
        .map(|start| Group {
            start,
            size: MAX_GROUP_SIZE.min(count - start + 1),
        })
        .collect()
}

/// The four block arrangements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridTemplate {
    /// One image, centered
    Single,
    /// Two images, one above the other
    Stacked,
    /// One image on top, two side by side below
    TopAndPair,
    /// Two rows of two
    Quad,
}

impl GridTemplate {
    /// Template for a group of `size` images
    pub fn for_size(size: usize) -> Option<Self> {
        match size {
            1 => Some(GridTemplate::Single),
            2 => Some(GridTemplate::Stacked),
            3 => Some(GridTemplate::TopAndPair),
            4 => Some(GridTemplate::Quad),
            _ => None,
        }
    }

    /// Slot widths per row, top row first
    pub fn rows(&self) -> &'static [&'static [f64]] {
        match self {
            GridTemplate::Single => &[&[HALF_WIDTH]],
            GridTemplate::Stacked => &[&[FULL_WIDTH], &[FULL_WIDTH]],
            GridTemplate::TopAndPair => &[&[FULL_WIDTH], &[HALF_WIDTH, HALF_WIDTH]],
            GridTemplate::Quad => &[&[HALF_WIDTH, HALF_WIDTH], &[HALF_WIDTH, HALF_WIDTH]],
        }
    }

    /// Number of images the template holds
    pub fn capacity(&self) -> usize {
        self.rows().iter().map(|row| row.len()).sum()
    }
}

/// A group of images drawn together under one caption
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub caption: String,
    pub template: GridTemplate,
    /// Image references relative to the report root, in slot order
    pub images: Vec<String>,
}

/// The laid-out blocks of one category
#[derive(Debug)]
pub struct CategoryLayout {
    pub dir: String,
    pub title: String,
    pub blocks: Vec<Block>,
    /// Set when layout stopped early because an image was missing
    pub error: Option<Error>,
}

impl CategoryLayout {
    /// Number of images placed in blocks
    pub fn image_count(&self) -> usize {
        self.blocks.iter().map(|b| b.images.len()).sum()
    }
}

/// Lay out `count` numbered images found in `category_dir`
///
/// Stops at the first group with a missing image; blocks laid out before it
/// are kept and the error is recorded on the result.
pub fn layout_category(
    dir: &str,
    title: &str,
    category_dir: &Path,
    count: usize,
    extensions: &[String],
) -> CategoryLayout {
    let mut layout = CategoryLayout {
        dir: dir.to_string(),
        title: title.to_string(),
        blocks: Vec::new(),
        error: None,
    };

    for group in plan_groups(count) {
        match build_block(dir, title, category_dir, group, extensions) {
            Ok(block) => layout.blocks.push(block),
            Err(e) => {
                warn!("Stopping layout of {}: {}", dir, e);
                layout.error = Some(e);
                break;
            }
        }
    }

    layout
}

fn build_block(
    dir: &str,
    title: &str,
    category_dir: &Path,
    group: Group,
    extensions: &[String],
) -> Result<Block> {
    let template = GridTemplate::for_size(group.size)
        .ok_or_else(|| Error::General(format!("No grid template for {} images", group.size)))?;

    let images = resolve_group(dir, category_dir, group.indices(), extensions)?
        .into_iter()
        .map(|file| format!("{}/{}", dir, file))
        .collect();

    Ok(Block {
        caption: title.to_string(),
        template,
        images,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sizes(count: usize) -> Vec<usize> {
        plan_groups(count).iter().map(|g| g.size).collect()
    }

    fn extensions() -> Vec<String> {
        vec!["jpg".to_string(), "jpeg".to_string()]
    }

    #[test]
    fn test_length_conversions() {
        let len = Length::from_cm(9.0);
        assert!((len.mm() - 90.0).abs() < 0.01);
        assert!((Length::from_mm(5.0).cm() - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_group_sizes() {
        assert_eq!(sizes(0), Vec::<usize>::new());
        assert_eq!(sizes(1), vec![1]);
        assert_eq!(sizes(2), vec![2]);
        assert_eq!(sizes(3), vec![3]);
        assert_eq!(sizes(4), vec![4]);
        assert_eq!(sizes(5), vec![4, 1]);
        assert_eq!(sizes(8), vec![4, 4]);
        assert_eq!(sizes(9), vec![4, 4, 1]);
    }

    #[test]
    fn test_group_invariants() {
        for n in 0..=40 {
            let groups = plan_groups(n);
            assert_eq!(groups.len(), n.div_ceil(4), "block count for {}", n);
            assert_eq!(groups.iter().map(|g| g.size).sum::<usize>(), n);

            for (i, group) in groups.iter().enumerate() {
                assert!((1..=4).contains(&group.size));
                if i + 1 < groups.len() {
                    assert_eq!(group.size, 4);
                }
            }

            // Consecutive, starting at 1
            let mut next = 1;
            for group in &groups {
                assert_eq!(group.start, next);
                next += group.size;
            }
        }
    }

    #[test]
    fn test_template_for_size() {
        assert_eq!(GridTemplate::for_size(1), Some(GridTemplate::Single));
        assert_eq!(GridTemplate::for_size(2), Some(GridTemplate::Stacked));
        assert_eq!(GridTemplate::for_size(3), Some(GridTemplate::TopAndPair));
        assert_eq!(GridTemplate::for_size(4), Some(GridTemplate::Quad));
        assert_eq!(GridTemplate::for_size(0), None);
        assert_eq!(GridTemplate::for_size(5), None);

        for size in 1..=4 {
            assert_eq!(GridTemplate::for_size(size).unwrap().capacity(), size);
        }
    }

    #[test]
    fn test_layout_category() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("mech");
        fs::create_dir_all(&dir).unwrap();
        for i in 1..=5 {
            let ext = if i % 2 == 0 { "jpeg" } else { "jpg" };
            fs::write(dir.join(format!("{}.{}", i, ext)), b"").unwrap();
        }

        let layout = layout_category("mech", "Mechanical", &dir, 5, &extensions());
        assert!(layout.error.is_none());
        assert_eq!(layout.blocks.len(), 2);
        assert_eq!(layout.blocks[0].template, GridTemplate::Quad);
        assert_eq!(
            layout.blocks[0].images,
            vec!["mech/1.jpg", "mech/2.jpeg", "mech/3.jpg", "mech/4.jpeg"]
        );
        assert_eq!(layout.blocks[1].template, GridTemplate::Single);
        assert_eq!(layout.blocks[1].images, vec!["mech/5.jpg"]);
        assert_eq!(layout.blocks[1].caption, "Mechanical");
        assert_eq!(layout.image_count(), 5);
    }

    #[test]
    fn test_layout_stops_at_missing_image() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("civil");
        fs::create_dir_all(&dir).unwrap();
        for i in [1, 2, 3, 4, 5, 7] {
            fs::write(dir.join(format!("{}.jpg", i)), b"").unwrap();
        }

        let layout = layout_category("civil", "Civil", &dir, 6, &extensions());
        assert_eq!(layout.blocks.len(), 1);
        match layout.error {
            Some(Error::MissingImage { ref category, index }) => {
                assert_eq!(category, "civil");
                assert_eq!(index, 6);
            }
            ref other => panic!("Expected MissingImage, got {:?}", other),
        }
    }
}
