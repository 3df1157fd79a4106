//! Fixed report tables
//!
//! Categories, section titles, month names and accepted extensions live in a
//! single immutable [`ReportConfig`] that is handed to every component. The
//! default configuration reproduces the Arabic daily report.

use crate::layout::Length;

/// The six report categories, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Mech,
    Hvac,
    Civil,
    Electric,
    Garden,
    Cleaning,
}

impl Category {
    /// All categories in their fixed section order
    pub const ALL: [Category; 6] = [
        Category::Mech,
        Category::Hvac,
        Category::Civil,
        Category::Electric,
        Category::Garden,
        Category::Cleaning,
    ];

    /// Subdirectory name inside the report folder
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Mech => "mech",
            Category::Hvac => "hvac",
            Category::Civil => "civil",
            Category::Electric => "electric",
            Category::Garden => "garden",
            Category::Cleaning => "cleaning",
        }
    }

    /// Arabic section title
    pub fn arabic_title(&self) -> &'static str {
        match self {
            Category::Mech => "الأعمال الميكانيكية",
            Category::Hvac => "أعمال التكييف",
            Category::Civil => "الأعمال المدنية",
            Category::Electric => "الأعمال الكهربائية والإليكترونية",
            Category::Garden => "الأعمال الزراعية",
            Category::Cleaning => "أعمال النظافة",
        }
    }
}

/// Arabic month names, January first
pub const ARABIC_MONTHS: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

/// One report section: where its images live and what it is called
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryEntry {
    /// Subdirectory name, also used as the image path prefix in the markup
    pub dir: String,
    /// Localized section title
    pub title: String,
}

impl From<Category> for CategoryEntry {
    fn from(category: Category) -> Self {
        Self {
            dir: category.dir_name().to_string(),
            title: category.arabic_title().to_string(),
        }
    }
}

/// All tables and fixed strings used to build a report
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Sections in document order
    pub categories: Vec<CategoryEntry>,
    /// Localized month names; index 0 is month "01"
    pub month_names: Vec<String>,
    /// Extensions tried, in order, when resolving a numbered image
    pub report_extensions: Vec<String>,
    /// Extensions recognised by the recursive counter
    pub count_extensions: Vec<String>,
    /// Title page heading
    pub document_title: String,
    /// Text shown before the date on the title page
    pub date_label: String,
    /// Table of contents heading
    pub contents_title: String,
    /// Replacement for the "Figure" label
    pub figure_name: String,
    /// Word placed before the section title in every caption
    pub caption_prefix: String,
    /// Logo used on the title page and in the page header
    pub logo_image: String,
    /// Photograph shown at the bottom of the title page
    pub cover_image: String,
    /// Main document font
    pub font: String,
    /// Height of every image slot
    pub image_height: Length,
    /// Vertical gap between rows of a block
    pub row_gap: Length,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            categories: Category::ALL.iter().copied().map(CategoryEntry::from).collect(),
            month_names: ARABIC_MONTHS.iter().map(|m| m.to_string()).collect(),
            report_extensions: vec!["jpg".to_string(), "jpeg".to_string()],
            count_extensions: ["jpg", "jpeg", "png", "gif", "bmp", "tiff"]
                .iter()
                .map(|e| e.to_string())
                .collect(),
            document_title: "التقرير اليومي لمدينة الملك عبدالعزيز الرياضية".to_string(),
            date_label: "بتاريخ".to_string(),
            contents_title: "فهرس المحتويات".to_string(),
            figure_name: "الشكل".to_string(),
            caption_prefix: "صور".to_string(),
            logo_image: "logo.jpg".to_string(),
            cover_image: "stad.jpg".to_string(),
            font: "Amiri".to_string(),
            image_height: Length::from_mm(90.0),
            row_gap: Length::from_mm(5.0),
        }
    }
}

impl ReportConfig {
    /// Section title for a category directory, or the directory name itself
    pub fn title_for<'a>(&'a self, dir: &'a str) -> &'a str {
        self.categories
            .iter()
            .find(|entry| entry.dir == dir)
            .map(|entry| entry.title.as_str())
            .unwrap_or(dir)
    }

    /// Localized name for a zero-padded month code ("01".."12")
    pub fn month_name(&self, code: &str) -> Option<&str> {
        let month: usize = code.parse().ok()?;
        if code.len() != 2 || month == 0 {
            return None;
        }
        self.month_names.get(month - 1).map(|s| s.as_str())
    }
}
