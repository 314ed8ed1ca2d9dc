//! Calendar-date detection for column headers and column values.

use chrono::NaiveDate;

/// Fraction of non-empty values that must parse as dates before a column is
/// considered a date column.
pub const MIN_DATE_COLUMN_FRACTION: f64 = 0.9;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%Y/%m/%d", "%d-%m-%Y"];

/// True iff `value` reads as a calendar date: a full date in one of the
/// supported formats, a year-month, or a bare 4-digit year. The length guard
/// rejects small integers ("20") that a lenient parser would happily treat
/// as dates.
pub fn is_date(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.len() <= 3 {
        return false;
    }
    if DATE_FORMATS
        .iter()
        .any(|fmt| NaiveDate::parse_from_str(trimmed, fmt).is_ok())
    {
        return true;
    }
    is_year_month(trimmed) || is_year(trimmed)
}

fn is_year(value: &str) -> bool {
    value.len() == 4 && value.parse::<u16>().is_ok_and(|y| y >= 1000)
}

fn is_year_month(value: &str) -> bool {
    let mut parts = value.splitn(2, ['-', '/']);
    let (Some(year), Some(month)) = (parts.next(), parts.next()) else {
        return false;
    };
    is_year(year)
        && month.len() <= 2
        && !month.is_empty()
        && month.parse::<u8>().is_ok_and(|m| (1..=12).contains(&m))
}

/// True iff the column header itself is a date ("wide" date layout).
pub fn detect_column_header_date(header: &str) -> bool {
    is_date(header)
}

/// True iff more than [`MIN_DATE_COLUMN_FRACTION`] of the non-empty values
/// are dates. A column with no non-empty values is never a date column.
pub fn detect_column_with_dates(values: &[String]) -> bool {
    let mut non_empty = 0usize;
    let mut dates = 0usize;
    for value in values {
        if value.is_empty() {
            continue;
        }
        non_empty += 1;
        if is_date(value) {
            dates += 1;
        }
    }
    non_empty > 0 && dates as f64 > non_empty as f64 * MIN_DATE_COLUMN_FRACTION
}
