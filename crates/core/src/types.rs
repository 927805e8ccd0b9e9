/// Surrogate primary keys (users) are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A fiscal year, e.g. `2025`.
pub type YearNumber = i32;

/// A calendar month within a year, `1..=12`.
pub type MonthNumber = i32;
