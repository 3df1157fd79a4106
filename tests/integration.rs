//! Integration tests for the daily report library

use daily_report::config::{CategoryEntry, ReportConfig};
use daily_report::counter::{count_images, CountPolicy};
use daily_report::date::ReportDate;
use daily_report::report::{build_report, write_report};
use daily_report::Error;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Create `count` sequentially numbered images in a category folder
fn add_images(root: &Path, category: &str, count: usize) {
    let dir = root.join(category);
    fs::create_dir_all(&dir).expect("Failed to create category directory");
    for i in 1..=count {
        let ext = if i % 3 == 0 { "jpeg" } else { "jpg" };
        fs::write(dir.join(format!("{}.{}", i, ext)), b"").expect("Failed to write image");
    }
}

/// Report folder named after its date, with the two cover images
fn report_folder(date: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let root = temp_dir.path().join(date);
    fs::create_dir_all(&root).expect("Failed to create report folder");
    fs::write(root.join("logo.jpg"), b"").unwrap();
    fs::write(root.join("stad.jpg"), b"").unwrap();
    (temp_dir, root)
}

#[test]
fn test_full_report() {
    let (_temp, root) = report_folder("9-9-2030");
    add_images(&root, "mech", 5);
    add_images(&root, "garden", 3);

    let config = ReportConfig::default();
    let date = ReportDate::parse("9-9-2030").unwrap();
    let report = build_report(&root, &date, &config).expect("Failed to build report");

    assert!(report.is_complete());
    let dirs: Vec<&str> = report.sections.iter().map(|s| s.dir.as_str()).collect();
    assert_eq!(dirs, vec!["mech", "garden"]);
    assert_eq!(report.sections[0].blocks, 2);
    assert_eq!(report.sections[0].images, 5);
    assert_eq!(report.sections[1].blocks, 1);

    assert!(report.tex.contains("{\\Large 9 سبتمبر 2030}"));
    assert!(report.tex.contains("\\section{الأعمال الميكانيكية}"));
    assert!(report.tex.contains("\\section{الأعمال الزراعية}"));
    assert!(!report.tex.contains("\\section{أعمال التكييف}"));
    assert!(report.tex.contains("{mech/3.jpeg}"));
    assert!(report.tex.contains("{garden/1.jpg}"));
    assert_eq!(report.tex.matches("\\begin{figure}[H]").count(), 3);
    assert!(report.tex.ends_with("\\end{document}"));

    let path = write_report(&root, &date, &report).expect("Failed to write report");
    assert_eq!(path, root.join("9-9-2030_report.tex"));
    assert_eq!(fs::read_to_string(&path).unwrap(), report.tex);
}

#[test]
fn test_sections_follow_category_order() {
    let (_temp, root) = report_folder("1-2-2030");
    // Created in reverse order on disk
    for dir in ["cleaning", "garden", "electric", "civil", "hvac", "mech"] {
        add_images(&root, dir, 1);
    }

    let config = ReportConfig::default();
    let date = ReportDate::parse("1-2-2030").unwrap();
    let report = build_report(&root, &date, &config).unwrap();

    let positions: Vec<usize> = config
        .categories
        .iter()
        .map(|c| report.tex.find(&format!("\\section{{{}}}", c.title)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_zero_image_categories_are_omitted() {
    let (_temp, root) = report_folder("3-4-2030");
    add_images(&root, "civil", 2);
    fs::create_dir_all(root.join("hvac")).unwrap();
    fs::write(root.join("hvac/readme.txt"), b"").unwrap();

    let config = ReportConfig::default();
    let counts = count_images(&root, &config, CountPolicy::Flat).unwrap();
    assert_eq!(counts.get("hvac"), Some(0));
    assert_eq!(counts.get("mech"), Some(0));

    let date = ReportDate::parse("3-4-2030").unwrap();
    let report = build_report(&root, &date, &config).unwrap();
    assert_eq!(report.tex.matches("\\section{").count(), 1);
    assert_eq!(report.sections.len(), 1);
}

#[test]
fn test_missing_image_only_stops_its_category() {
    let (_temp, root) = report_folder("5-3-2030");
    add_images(&root, "mech", 4);
    // electric has 1, 2, 3, 4, 6: five images counted, number 5 missing
    add_images(&root, "electric", 4);
    fs::write(root.join("electric/6.jpg"), b"").unwrap();
    add_images(&root, "cleaning", 2);

    let config = ReportConfig::default();
    let date = ReportDate::parse("5-3-2030").unwrap();
    let report = build_report(&root, &date, &config).unwrap();

    assert!(!report.is_complete());
    assert_eq!(report.failures.len(), 1);
    match &report.failures[0] {
        Error::MissingImage { category, index } => {
            assert_eq!(category, "electric");
            assert_eq!(*index, 5);
        }
        other => panic!("Expected MissingImage, got {:?}", other),
    }

    let dirs: Vec<&str> = report.sections.iter().map(|s| s.dir.as_str()).collect();
    assert_eq!(dirs, vec!["mech", "electric", "cleaning"]);
    assert_eq!(report.sections[1].images, 4);
    assert!(!report.tex.contains("electric/6.jpg"));
}

#[test]
fn test_unknown_month_is_not_fatal() {
    let (_temp, root) = report_folder("1-13-2030");
    add_images(&root, "mech", 1);

    let date = ReportDate::parse("1-13-2030").unwrap();
    let report = build_report(&root, &date, &ReportConfig::default()).unwrap();
    assert!(report.tex.contains("{\\Large 1 13 2030}"));
}

#[test]
fn test_alternate_tables() {
    let (_temp, root) = report_folder("25-12-2030");
    add_images(&root, "site", 1);
    add_images(&root, "mech", 1);

    let config = ReportConfig {
        categories: vec![CategoryEntry {
            dir: "site".to_string(),
            title: "Site Works".to_string(),
        }],
        month_names: [
            "January", "February", "March", "April", "May", "June", "July",
            "August", "September", "October", "November", "December",
        ]
        .iter()
        .map(|m| m.to_string())
        .collect(),
        caption_prefix: "Photos:".to_string(),
        ..ReportConfig::default()
    };

    let date = ReportDate::parse("25-12-2030").unwrap();
    let report = build_report(&root, &date, &config).unwrap();

    assert!(report.tex.contains("{\\Large 25 December 2030}"));
    assert!(report.tex.contains("\\section{Site Works}"));
    assert!(report.tex.contains("\\caption{Photos: Site Works}"));
    assert!(!report.tex.contains("mech/1.jpg"));
}
