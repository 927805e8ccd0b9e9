//! Year and month bounds.

use crate::error::CoreError;
use crate::types::{MonthNumber, YearNumber};

/// Smallest accepted fiscal year. Zero doubles as "missing" on the wire.
pub const MIN_YEAR: YearNumber = 1;

/// Largest accepted fiscal year; keeps years four digits wide.
pub const MAX_YEAR: YearNumber = 9999;

/// Every seeded year carries exactly this many months.
pub const MONTHS_PER_YEAR: MonthNumber = 12;

/// Validate an optional year parameter, returning it when in range.
pub fn validate_year(year: Option<YearNumber>) -> Result<YearNumber, CoreError> {
    match year {
        Some(y) if (MIN_YEAR..=MAX_YEAR).contains(&y) => Ok(y),
        Some(y) => Err(CoreError::Validation(format!(
            "Invalid year {y}. Must be between {MIN_YEAR} and {MAX_YEAR}"
        ))),
        None => Err(CoreError::Validation("Year is required".into())),
    }
}

/// Validate an optional month parameter, returning it when in `1..=12`.
pub fn validate_month(month: Option<MonthNumber>) -> Result<MonthNumber, CoreError> {
    match month {
        Some(m) if (1..=MONTHS_PER_YEAR).contains(&m) => Ok(m),
        Some(m) => Err(CoreError::Validation(format!(
            "Invalid month {m}. Must be between 1 and {MONTHS_PER_YEAR}"
        ))),
        None => Err(CoreError::Validation("Month is required".into())),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn year_bounds() {
        assert_eq!(validate_year(Some(2025)).unwrap(), 2025);
        assert_eq!(validate_year(Some(MAX_YEAR)).unwrap(), MAX_YEAR);
        assert_matches!(validate_year(Some(0)), Err(CoreError::Validation(_)));
        assert_matches!(validate_year(Some(-4)), Err(CoreError::Validation(_)));
        assert_matches!(validate_year(Some(10_000)), Err(CoreError::Validation(_)));
        assert_matches!(validate_year(None), Err(CoreError::Validation(_)));
    }

    #[test]
    fn month_bounds() {
        assert_eq!(validate_month(Some(1)).unwrap(), 1);
        assert_eq!(validate_month(Some(12)).unwrap(), 12);
        assert_matches!(validate_month(Some(0)), Err(CoreError::Validation(_)));
        assert_matches!(validate_month(Some(13)), Err(CoreError::Validation(_)));
        assert_matches!(validate_month(None), Err(CoreError::Validation(_)));
    }
}
