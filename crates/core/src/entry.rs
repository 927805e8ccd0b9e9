//! Wire-level views of monthly figures and the patch payload that edits them.
//!
//! Field names are camelCase on the wire (`revenueNote`, `targetRevenue`).

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{MonthNumber, YearNumber};

/// Maximum length of a revenue or expense note, in characters.
pub const MAX_NOTE_LENGTH: u64 = 2000;

/// Maximum length of a category code.
pub const MAX_CODE_LENGTH: u64 = 32;

/// Largest accepted revenue, expense, or target. Year totals of values up to
/// this bound stay finite.
pub const MAX_AMOUNT: f64 = 1e12;

/// Current figures of one category within one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryEntry {
    pub code: String,
    pub label: String,
    pub revenue: f64,
    pub revenue_note: String,
    pub expense: f64,
    pub expense_note: String,
    #[serde(default)]
    pub target_revenue: f64,
}

impl CategoryEntry {
    pub fn zeroed(code: &str, label: &str) -> Self {
        Self {
            code: code.to_string(),
            label: label.to_string(),
            revenue: 0.0,
            revenue_note: String::new(),
            expense: 0.0,
            expense_note: String::new(),
            target_revenue: 0.0,
        }
    }

    /// Overwrite the five mutable fields with the patch values.
    pub fn apply(&mut self, patch: &CategoryPatch) {
        self.revenue = patch.revenue;
        self.expense = patch.expense;
        self.revenue_note.clone_from(&patch.revenue_note);
        self.expense_note.clone_from(&patch.expense_note);
        self.target_revenue = patch.target_revenue;
    }
}

/// One month of a year with its categories in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthView {
    pub id: MonthNumber,
    pub name: String,
    pub categories: Vec<CategoryEntry>,
}

impl MonthView {
    /// Apply patches by category code. Patches whose code matches no category
    /// are ignored, mirroring the server-side update.
    pub fn apply_patches(&mut self, patches: &[CategoryPatch]) {
        for patch in patches {
            if let Some(entry) = self.categories.iter_mut().find(|c| c.code == patch.code) {
                entry.apply(patch);
            }
        }
    }
}

/// Replacement values for one category of a month.
///
/// Every field is optional on the wire; absent numbers become `0` and absent
/// notes become empty, so a patch always replaces all five values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryPatch {
    #[validate(length(max = MAX_CODE_LENGTH))]
    pub code: String,
    #[validate(range(min = 0.0, max = MAX_AMOUNT))]
    pub revenue: f64,
    #[validate(range(min = 0.0, max = MAX_AMOUNT))]
    pub expense: f64,
    #[validate(length(max = MAX_NOTE_LENGTH))]
    pub revenue_note: String,
    #[validate(length(max = MAX_NOTE_LENGTH))]
    pub expense_note: String,
    #[validate(range(min = 0.0, max = MAX_AMOUNT))]
    pub target_revenue: f64,
}

impl From<&CategoryEntry> for CategoryPatch {
    fn from(entry: &CategoryEntry) -> Self {
        Self {
            code: entry.code.clone(),
            revenue: entry.revenue,
            expense: entry.expense,
            revenue_note: entry.revenue_note.clone(),
            expense_note: entry.expense_note.clone(),
            target_revenue: entry.target_revenue,
        }
    }
}

/// Request body of the bulk month update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthUpdate {
    pub year: Option<YearNumber>,
    pub month: Option<MonthNumber>,
    #[serde(default)]
    pub categories: Vec<CategoryPatch>,
}

/// Validate every patch, reporting the first offending index.
pub fn validate_patches(patches: &[CategoryPatch]) -> Result<(), CoreError> {
    for (idx, patch) in patches.iter().enumerate() {
        if !(patch.revenue.is_finite()
            && patch.expense.is_finite()
            && patch.target_revenue.is_finite())
        {
            return Err(CoreError::Validation(format!(
                "categories[{idx}] ({}): values must be finite numbers",
                patch.code
            )));
        }
        patch.validate().map_err(|e| {
            CoreError::Validation(format!("categories[{idx}] ({}): {e}", patch.code))
        })?;
    }
    Ok(())
}
