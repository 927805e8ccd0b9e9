//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod catalog_repo;
pub mod month_repo;
pub mod user_repo;
pub mod year_repo;

pub use catalog_repo::CatalogRepo;
pub use month_repo::MonthRepo;
pub use user_repo::UserRepo;
pub use year_repo::YearRepo;

/// Select list shared by the year and month projections.
pub(crate) const ENTRY_SELECT: &str = "SELECT m.month, m.name, c.code, c.label, \
        mc.revenue, mc.expense, mc.revenue_note, mc.expense_note, mc.target_revenue \
     FROM months m \
     JOIN monthly_categories mc ON mc.year = m.year AND mc.month = m.month \
     JOIN categories c ON c.code = mc.category_code";
