//! Transaction date normalization.
//!
//! Stored dates arrive in one of two shapes: ISO `YYYY-MM-DD`, or the legacy
//! `"DD Mon"` short form with a Portuguese month abbreviation and an implicit
//! current year. The legacy form is a migration artifact from an earlier mock
//! data format and is kept only behind this module.

use chrono::{Datelike, Local, NaiveDate};
use tracing::warn;

use crate::errors::ParseDateError;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Lenient normalizer: always returns a valid date.
///
/// Malformed input degrades to today's date rather than failing, and an
/// unknown legacy month abbreviation degrades to January. Dashboards rely on
/// this total contract; callers that need to detect bad dates should use
/// [`parse_transaction_date`] instead.
pub fn transaction_date(raw: &str) -> NaiveDate {
    match parse_transaction_date(raw) {
        Ok(date) => date,
        Err(ParseDateError::UnknownMonth(_)) => {
            warn!(input = raw, "unknown month abbreviation, defaulting to January");
            let now = today();
            let day = raw
                .split_whitespace()
                .next()
                .and_then(|token| token.parse::<u32>().ok())
                .unwrap_or(1);
            NaiveDate::from_ymd_opt(now.year(), 1, day).unwrap_or(now)
        }
        Err(err) => {
            warn!(input = raw, %err, "unparseable transaction date, falling back to today");
            today()
        }
    }
}

/// Strict normalizer: surfaces a typed error instead of absorbing bad input.
pub fn parse_transaction_date(raw: &str) -> Result<NaiveDate, ParseDateError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseDateError::Empty);
    }
    if trimmed.contains('-') {
        return parse_iso(trimmed);
    }
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.len() == 2 {
        return parse_legacy(trimmed, tokens[0], tokens[1]);
    }
    Err(ParseDateError::Unrecognized(trimmed.to_string()))
}

/// Builds the date from explicit components. Going through a timezone-aware
/// parser here could shift the date by a day.
fn parse_iso(raw: &str) -> Result<NaiveDate, ParseDateError> {
    let invalid = || ParseDateError::InvalidIso(raw.to_string());
    let mut parts = raw.splitn(3, '-');
    let year = parts
        .next()
        .and_then(|p| p.parse::<i32>().ok())
        .ok_or_else(invalid)?;
    let month = parts
        .next()
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or_else(invalid)?;
    let day = parts
        .next()
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or_else(invalid)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

fn parse_legacy(raw: &str, day_token: &str, month_token: &str) -> Result<NaiveDate, ParseDateError> {
    let day = day_token
        .parse::<u32>()
        .map_err(|_| ParseDateError::Unrecognized(raw.to_string()))?;
    let month = MONTH_ABBREVIATIONS
        .iter()
        .position(|abbr| *abbr == month_token)
        .map(|index| index as u32 + 1)
        .ok_or_else(|| ParseDateError::UnknownMonth(month_token.to_string()))?;
    NaiveDate::from_ymd_opt(today().year(), month, day)
        .ok_or_else(|| ParseDateError::Unrecognized(raw.to_string()))
}
