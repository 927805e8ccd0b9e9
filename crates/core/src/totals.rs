//! Month and year totals shown on the dashboard cards.

use serde::{Deserialize, Serialize};

use crate::entry::{CategoryEntry, MonthView};
use crate::types::{MonthNumber, YearNumber};

/// Aggregated figures of one month (or a whole year).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub revenue: f64,
    pub expense: f64,
    /// `revenue - expense`.
    pub result: f64,
    /// Sum of category revenue targets.
    pub target: f64,
    /// `revenue / target`, clamped to `[0, 1]`; zero when there is no target.
    pub progress: f64,
}

impl Totals {
    fn from_sums(revenue: f64, expense: f64, target: f64) -> Self {
        let progress = if target > 0.0 {
            (revenue / target).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            revenue,
            expense,
            result: revenue - expense,
            target,
            progress,
        }
    }
}

/// Figures of a single category, as shown in the month detail view.
pub fn category_totals(entry: &CategoryEntry) -> Totals {
    Totals::from_sums(entry.revenue, entry.expense, entry.target_revenue)
}

pub fn month_totals(month: &MonthView) -> Totals {
    let (revenue, expense, target) = month.categories.iter().fold(
        (0.0, 0.0, 0.0),
        |(r, e, t), c| (r + c.revenue, e + c.expense, t + c.target_revenue),
    );
    Totals::from_sums(revenue, expense, target)
}

pub fn year_totals(months: &[MonthView]) -> Totals {
    let (revenue, expense, target) = months.iter().map(month_totals).fold(
        (0.0, 0.0, 0.0),
        |(r, e, t), m| (r + m.revenue, e + m.expense, t + m.target),
    );
    Totals::from_sums(revenue, expense, target)
}

/// Totals of one month, as listed in a year summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub id: MonthNumber,
    pub name: String,
    #[serde(flatten)]
    pub totals: Totals,
}

/// Per-month totals of a year plus the year-wide totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSummary {
    pub year: YearNumber,
    pub months: Vec<MonthSummary>,
    pub totals: Totals,
}

pub fn summarize_year(year: YearNumber, months: &[MonthView]) -> YearSummary {
    YearSummary {
        year,
        months: months
            .iter()
            .map(|m| MonthSummary {
                id: m.id,
                name: m.name.clone(),
                totals: month_totals(m),
            })
            .collect(),
        totals: year_totals(months),
    }
}
