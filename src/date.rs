//! Report date parsing and localization
//!
//! The report date normally comes from the report folder's name
//! (`D-M-Y`, e.g. `9-9-2030`). A date expression such as `today` or
//! `2030-09-09` can be given instead.

use chrono::{Datelike, Local, NaiveDate};
use log::warn;

use crate::config::ReportConfig;
use crate::error::{Error, Result};

/// A report date as written in the report folder name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDate {
    raw: String,
    day: u32,
    month: String,
    year: String,
}

impl ReportDate {
    /// Parse a `D-M-Y` string
    ///
    /// Day and month may have one or two digits. The month is kept as a
    /// zero-padded code ("03") for the month-name lookup; the year is kept
    /// as written.
    pub fn parse(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('-').collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(Error::UnparseableDate(s.to_string()));
        };

        let day: u32 = day
            .trim()
            .parse()
            .map_err(|_| Error::UnparseableDate(s.to_string()))?;

        let month = month.trim();
        if month.parse::<u32>().is_err() {
            return Err(Error::UnparseableDate(s.to_string()));
        }

        Ok(Self {
            raw: s.to_string(),
            day,
            month: format!("{:0>2}", month),
            year: year.to_string(),
        })
    }

    /// Build a report date from a calendar date
    pub fn from_naive(date: NaiveDate) -> Self {
        Self {
            raw: format!("{}-{}-{}", date.day(), date.month(), date.year()),
            day: date.day(),
            month: format!("{:02}", date.month()),
            year: date.year().to_string(),
        }
    }

    /// The date string used to name output files
    pub fn stem(&self) -> &str {
        &self.raw
    }

    /// Day of the month
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Zero-padded month code
    pub fn month_code(&self) -> &str {
        &self.month
    }

    /// Render as "<day> <month name> <year>"
    ///
    /// A month code missing from the table is emitted as-is.
    pub fn localize(&self, config: &ReportConfig) -> String {
        let month = match config.month_name(&self.month) {
            Some(name) => name,
            None => {
                warn!("Unknown month '{}' in report date {}, using the number", self.month, self.raw);
                self.month.as_str()
            }
        };
        format!("{} {} {}", self.day, month, self.year)
    }
}

/// Date override expression
#[derive(Debug, Clone, PartialEq)]
pub enum DateExpression {
    /// Use today's date
    Today,
    /// Use an explicit date
    Explicit(NaiveDate),
}

/// Parse a date override
///
/// Supported formats:
/// - `"today"` → Today
/// - `"2030-11-20"` → Explicit date (ISO format)
/// - `"11/20/2030"` → Explicit date (US format)
pub fn parse_date_expression(expr: &str) -> Result<DateExpression> {
    let expr = expr.trim();

    if expr.eq_ignore_ascii_case("today") {
        return Ok(DateExpression::Today);
    }

    // ISO format: 2030-11-20
    if let Ok(date) = NaiveDate::parse_from_str(expr, "%Y-%m-%d") {
        return Ok(DateExpression::Explicit(date));
    }

    // US format: 11/20/2030
    if let Ok(date) = NaiveDate::parse_from_str(expr, "%m/%d/%Y") {
        return Ok(DateExpression::Explicit(date));
    }

    Err(Error::InvalidDateExpression(format!("Unable to parse date expression: {}", expr)))
}

/// Resolve a DateExpression to an actual date
pub fn resolve_date(expr: &DateExpression) -> NaiveDate {
    match expr {
        DateExpression::Today => Local::now().date_naive(),
        DateExpression::Explicit(date) => *date,
    }
}

/// Report date from a command-line override
///
/// Accepts the folder-name `D-M-Y` format (day first, one or two digits)
/// as well as any date expression.
pub fn report_date_from_override(expr: &str) -> Result<ReportDate> {
    let expr = expr.trim();
    let parts: Vec<&str> = expr.split('-').collect();

    if parts.len() == 3 && parts[0].len() <= 2 {
        return ReportDate::parse(expr);
    }

    let parsed = parse_date_expression(expr)?;
    Ok(ReportDate::from_naive(resolve_date(&parsed)))
}
