//! View state of the dashboard: cached years, the current selection, and the
//! month being edited.
//!
//! The server is authoritative. Zero-valued templates from
//! [`finboard_core::catalog`] are only shown when the initial load fails.

use std::collections::BTreeMap;

use chrono::Datelike;
use finboard_core::catalog::year_template;
use finboard_core::entry::{CategoryPatch, MonthUpdate, MonthView};
use finboard_core::totals::{category_totals, month_totals, year_totals, Totals};
use finboard_core::types::{MonthNumber, YearNumber};

use crate::api::{ApiClient, SessionUser};
use crate::error::ClientError;

/// A month copied out of the cache for editing.
#[derive(Debug, Clone)]
struct EditBuffer {
    year: YearNumber,
    month: MonthView,
}

pub struct Dashboard {
    api: ApiClient,
    session: Option<SessionUser>,
    years: BTreeMap<YearNumber, Vec<MonthView>>,
    default_year: YearNumber,
    selected_year: YearNumber,
    selected_month: Option<MonthNumber>,
    editing: Option<EditBuffer>,
}

impl Dashboard {
    /// Start with the current calendar year selected and nothing cached.
    pub fn new(api: ApiClient) -> Self {
        Self::starting_at(api, chrono::Utc::now().year())
    }

    /// Start with `year` as the default selection.
    pub fn starting_at(api: ApiClient, year: YearNumber) -> Self {
        Self {
            api,
            session: None,
            years: BTreeMap::new(),
            default_year: year,
            selected_year: year,
            selected_month: None,
            editing: None,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<&SessionUser, ClientError> {
        let user = self.api.login(username, password).await?;
        tracing::info!(username = %user.username, role = %user.role, "Session started");
        Ok(self.session.insert(user))
    }

    /// Forget the session and any unsaved edit.
    pub fn logout(&mut self) {
        self.api.set_token(None);
        self.session = None;
        self.editing = None;
    }

    pub fn session(&self) -> Option<&SessionUser> {
        self.session.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(SessionUser::is_admin)
    }

    /// Load every seeded year and select the latest.
    ///
    /// When the server knows no year yet, the default year is used (and
    /// created first when signed in as admin). On any failure the cache is
    /// replaced by a zero-valued template of the selected year and the error
    /// is returned.
    pub async fn load_initial_data(&mut self) -> Result<(), ClientError> {
        match self.fetch_all_years().await {
            Ok((store, latest)) => {
                self.years = store;
                self.selected_year = latest;
                tracing::info!(years = self.years.len(), selected = latest, "Dashboard loaded");
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, year = self.selected_year, "Falling back to an empty year");
                self.years = BTreeMap::from([(self.selected_year, year_template())]);
                Err(e)
            }
        }
    }

    async fn fetch_all_years(
        &self,
    ) -> Result<(BTreeMap<YearNumber, Vec<MonthView>>, YearNumber), ClientError> {
        let mut years = self.api.list_years().await?;
        if years.is_empty() {
            if self.is_admin() {
                self.api.create_year(self.default_year).await?;
            }
            years.push(self.default_year);
        }

        let mut store = BTreeMap::new();
        for &year in &years {
            store.insert(year, self.api.load_year(year).await?);
        }
        let latest = years.iter().copied().max().unwrap_or(self.default_year);
        Ok((store, latest))
    }

    /// Fetch one year from the server into the cache.
    pub async fn load_year(&mut self, year: YearNumber) -> Result<&[MonthView], ClientError> {
        let months = self.api.load_year(year).await?;
        tracing::debug!(year, months = months.len(), "Year cached");
        let slot = self.years.entry(year).or_default();
        *slot = months;
        Ok(slot.as_slice())
    }

    /// Create the year after the newest cached one, cache it, and select it.
    pub async fn add_new_year(&mut self) -> Result<YearNumber, ClientError> {
        if !self.is_admin() {
            return Err(ClientError::Forbidden("Only admins can add years"));
        }
        let next = self
            .years
            .keys()
            .next_back()
            .copied()
            .unwrap_or(self.selected_year)
            + 1;

        self.api.create_year(next).await?;
        self.load_year(next).await?;
        self.select_year(next);
        Ok(next)
    }

    /// Switch the displayed year. Any unsaved edit is discarded.
    pub fn select_year(&mut self, year: YearNumber) {
        self.selected_year = year;
        self.editing = None;
    }

    pub fn selected_year(&self) -> YearNumber {
        self.selected_year
    }

    /// Select a month of the displayed year and return it if cached.
    pub fn select_month(&mut self, month: MonthNumber) -> Option<&MonthView> {
        self.selected_month = Some(month);
        self.month(month)
    }

    pub fn selected_month(&self) -> Option<&MonthView> {
        self.selected_month.and_then(|m| self.month(m))
    }

    /// Months of the displayed year; empty when it is not cached.
    pub fn months(&self) -> &[MonthView] {
        self.years
            .get(&self.selected_year)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn month(&self, month: MonthNumber) -> Option<&MonthView> {
        self.months().iter().find(|m| m.id == month)
    }

    /// Copy a month of the displayed year into the edit buffer and select it.
    pub fn begin_edit(&mut self, month: MonthNumber) -> Result<&mut MonthView, ClientError> {
        if !self.is_admin() {
            return Err(ClientError::Forbidden("Only admins can edit months"));
        }
        let view = self
            .month(month)
            .cloned()
            .ok_or(ClientError::MonthNotLoaded {
                year: self.selected_year,
                month,
            })?;

        self.selected_month = Some(month);
        let buffer = self.editing.insert(EditBuffer {
            year: self.selected_year,
            month: view,
        });
        Ok(&mut buffer.month)
    }

    pub fn edit_buffer(&self) -> Option<&MonthView> {
        self.editing.as_ref().map(|e| &e.month)
    }

    pub fn edit_buffer_mut(&mut self) -> Option<&mut MonthView> {
        self.editing.as_mut().map(|e| &mut e.month)
    }

    /// Send the edit buffer to the server and, on success, write it into the
    /// cache. Last writer wins. The buffer survives a failed save.
    pub async fn save_changes(&mut self) -> Result<u64, ClientError> {
        let buffer = self.editing.as_ref().ok_or(ClientError::NotEditing)?;
        let update = MonthUpdate {
            year: Some(buffer.year),
            month: Some(buffer.month.id),
            categories: buffer.month.categories.iter().map(CategoryPatch::from).collect(),
        };

        let updated = self.api.update_month(&update).await?;

        if let Some(buffer) = self.editing.take() {
            if let Some(cached) = self
                .years
                .get_mut(&buffer.year)
                .and_then(|months| months.iter_mut().find(|m| m.id == buffer.month.id))
            {
                cached.categories = buffer.month.categories;
            }
            tracing::info!(year = buffer.year, month = buffer.month.id, updated, "Month saved");
        }
        Ok(updated)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Totals of a month of the displayed year.
    pub fn month_totals(&self, month: MonthNumber) -> Option<Totals> {
        self.month(month).map(month_totals)
    }

    /// Result and progress of one category in a month of the displayed year.
    pub fn category_totals(&self, month: MonthNumber, code: &str) -> Option<Totals> {
        self.month(month)?
            .categories
            .iter()
            .find(|c| c.code == code)
            .map(category_totals)
    }

    /// Totals of the displayed year.
    pub fn year_totals(&self) -> Totals {
        year_totals(self.months())
    }

    /// Cached years, newest first.
    pub fn available_years(&self) -> Vec<YearNumber> {
        self.years.keys().rev().copied().collect()
    }
}
