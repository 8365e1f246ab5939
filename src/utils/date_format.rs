//! Conversion between calendar dates and the `dd/mm/yyyy` text used in
//! forms and pages.

use chrono::NaiveDate;

pub const DATE_PATTERN: &str = "%d/%m/%Y";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_PATTERN).to_string()
}

pub fn parse_date(input: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(input.trim(), DATE_PATTERN)
}
