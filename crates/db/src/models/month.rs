//! Joined month/category rows and their grouping into month views.

use finboard_core::entry::{CategoryEntry, MonthView};
use finboard_core::types::MonthNumber;
use sqlx::FromRow;

/// One row of the `months x monthly_categories x categories` join.
#[derive(Debug, Clone, FromRow)]
pub struct MonthEntryRow {
    pub month: MonthNumber,
    pub name: String,
    pub code: String,
    pub label: String,
    pub revenue: f64,
    pub expense: f64,
    pub revenue_note: String,
    pub expense_note: String,
    pub target_revenue: f64,
}

impl MonthEntryRow {
    fn into_entry(self) -> CategoryEntry {
        CategoryEntry {
            code: self.code,
            label: self.label,
            revenue: self.revenue,
            revenue_note: self.revenue_note,
            expense: self.expense,
            expense_note: self.expense_note,
            target_revenue: self.target_revenue,
        }
    }
}

/// Group rows already ordered by month into one [`MonthView`] per month.
///
/// Rows of the same month must be contiguous; category order is preserved.
pub fn group_by_month(rows: Vec<MonthEntryRow>) -> Vec<MonthView> {
    let mut months: Vec<MonthView> = Vec::new();
    for row in rows {
        match months.last_mut() {
            Some(current) if current.id == row.month => {
                current.categories.push(row.into_entry());
            }
            _ => months.push(MonthView {
                id: row.month,
                name: row.name.clone(),
                categories: vec![row.into_entry()],
            }),
        }
    }
    months
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(month: MonthNumber, code: &str) -> MonthEntryRow {
        MonthEntryRow {
            month,
            name: format!("M{month}"),
            code: code.to_string(),
            label: code.to_string(),
            revenue: 0.0,
            expense: 0.0,
            revenue_note: String::new(),
            expense_note: String::new(),
            target_revenue: 0.0,
        }
    }

    #[test]
    fn empty_rows_give_no_months() {
        assert!(group_by_month(Vec::new()).is_empty());
    }

    #[test]
    fn rows_are_grouped_in_order() {
        let months = group_by_month(vec![
            row(1, "IC"),
            row(1, "ABERTO"),
            row(2, "IC"),
            row(2, "ABERTO"),
            row(3, "IC"),
        ]);
        assert_eq!(months.len(), 3);
        assert_eq!(months[0].id, 1);
        assert_eq!(months[0].name, "M1");
        let codes: Vec<_> = months[1].categories.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["IC", "ABERTO"]);
        assert_eq!(months[2].categories.len(), 1);
    }
}
