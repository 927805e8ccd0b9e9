//! The fixed category catalog and month calendar.
//!
//! The server seeds the database from these tables; the client only uses
//! them to build zero-valued placeholders when the server is unreachable.

use crate::entry::{CategoryEntry, MonthView};
use crate::period::MONTHS_PER_YEAR;
use crate::types::MonthNumber;

/// One bucket of the category catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryPreset {
    pub code: &'static str,
    pub label: &'static str,
}

/// The seven budget buckets, in display order.
pub const CATEGORY_PRESET: &[CategoryPreset] = &[
    CategoryPreset { code: "IC", label: "IC" },
    CategoryPreset { code: "ABERTO", label: "ABERTO" },
    CategoryPreset { code: "FIXO", label: "FIXO" },
    CategoryPreset { code: "EAD", label: "EAD" },
    CategoryPreset { code: "PROJETOS", label: "PROJETOS CORP." },
    CategoryPreset { code: "OUTROS", label: "OUTROS" },
    CategoryPreset { code: "INVEST", label: "INVESTIMENTOS" },
];

/// Portuguese month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Display name of a month, or `None` outside `1..=12`.
pub fn month_name(month: MonthNumber) -> Option<&'static str> {
    if (1..=MONTHS_PER_YEAR).contains(&month) {
        Some(MONTH_NAMES[(month - 1) as usize])
    } else {
        None
    }
}

/// Look up a preset by category code.
pub fn find_preset(code: &str) -> Option<&'static CategoryPreset> {
    CATEGORY_PRESET.iter().find(|p| p.code == code)
}

/// Zero-valued month with every preset category.
pub fn month_template(month: MonthNumber) -> MonthView {
    MonthView {
        id: month,
        name: month_name(month).unwrap_or_default().to_string(),
        categories: CATEGORY_PRESET
            .iter()
            .map(|p| CategoryEntry::zeroed(p.code, p.label))
            .collect(),
    }
}

/// Twelve zero-valued months.
pub fn year_template() -> Vec<MonthView> {
    (1..=MONTHS_PER_YEAR).map(month_template).collect()
}
