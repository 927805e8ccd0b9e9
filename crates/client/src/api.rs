//! REST client for the dashboard HTTP API.
//!
//! Wraps the `/api/v1` endpoints (login, years, year, month, summary) using
//! [`reqwest`]. A successful [`ApiClient::login`] stores the bearer token and
//! every later request sends it.

use finboard_core::entry::{MonthUpdate, MonthView};
use finboard_core::roles::ROLE_ADMIN;
use finboard_core::totals::YearSummary;
use finboard_core::types::{DbId, MonthNumber, YearNumber};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::ClientError;

/// The signed-in account as reported by the server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionUser {
    pub id: DbId,
    pub username: String,
    /// Display name, e.g. `JML Admin`.
    pub name: String,
    pub role: String,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
    user: SessionUser,
}

#[derive(Debug, Deserialize)]
struct YearsResponse {
    years: Vec<YearNumber>,
}

/// Response of `POST /years`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateYearResponse {
    pub ok: bool,
    pub year: YearNumber,
    /// `false` when the year already existed.
    pub created: bool,
}

#[derive(Debug, Deserialize)]
struct YearResponse {
    months: Vec<MonthView>,
}

#[derive(Debug, Deserialize)]
struct MonthResponse {
    month: MonthView,
}

#[derive(Debug, Deserialize)]
struct UpdateMonthResponse {
    updated: u64,
}

/// HTTP client for one dashboard server.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for a server.
    ///
    /// * `base_url` - Server origin, e.g. `http://localhost:3000`. A trailing
    ///   slash is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            token: None,
        }
    }

    /// Use an access token obtained elsewhere.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Authenticate and keep the issued token for later requests.
    ///
    /// Sends `POST /api/v1/auth/login`.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<SessionUser, ClientError> {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(&body)
            .send()
            .await?;

        let login: LoginResponse = Self::parse_response(response).await?;
        self.token = Some(login.access_token);
        tracing::debug!(username = %login.user.username, role = %login.user.role, "Logged in");
        Ok(login.user)
    }

    /// List seeded years, newest first. Sends `GET /api/v1/years`.
    pub async fn list_years(&self) -> Result<Vec<YearNumber>, ClientError> {
        let response = self.get("/years").send().await?;
        let years: YearsResponse = Self::parse_response(response).await?;
        Ok(years.years)
    }

    /// Seed a year. Sends `POST /api/v1/years`; requires the admin role.
    pub async fn create_year(&self, year: YearNumber) -> Result<CreateYearResponse, ClientError> {
        let response = self
            .authorized(self.client.post(self.url("/years")))
            .json(&serde_json::json!({ "year": year }))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch the twelve months of a year. The server seeds unknown years.
    ///
    /// Sends `GET /api/v1/year?year=`.
    pub async fn load_year(&self, year: YearNumber) -> Result<Vec<MonthView>, ClientError> {
        let response = self.get("/year").query(&[("year", year)]).send().await?;
        let year: YearResponse = Self::parse_response(response).await?;
        Ok(year.months)
    }

    /// Fetch one month, or `None` when the server has never seeded it.
    ///
    /// Sends `GET /api/v1/month?year=&month=`.
    pub async fn load_month(
        &self,
        year: YearNumber,
        month: MonthNumber,
    ) -> Result<Option<MonthView>, ClientError> {
        let response = self
            .get("/month")
            .query(&[("year", year), ("month", month)])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let month: MonthResponse = Self::parse_response(response).await?;
        Ok(Some(month.month))
    }

    /// Replace the figures of the listed categories. Returns how many rows
    /// the server changed.
    ///
    /// Sends `PUT /api/v1/month`; requires the admin role.
    pub async fn update_month(&self, update: &MonthUpdate) -> Result<u64, ClientError> {
        let response = self
            .authorized(self.client.put(self.url("/month")))
            .json(update)
            .send()
            .await?;

        let result: UpdateMonthResponse = Self::parse_response(response).await?;
        Ok(result.updated)
    }

    /// Month and year totals. Sends `GET /api/v1/summary?year=`.
    pub async fn summary(&self, year: YearNumber) -> Result<YearSummary, ClientError> {
        let response = self.get("/summary").query(&[("year", year)]).send().await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorized(self.client.get(self.url(path)))
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Return the response unchanged on a success status, or a
    /// [`ClientError::Api`] carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let api = ApiClient::new("http://localhost:3000/");
        assert_eq!(api.url("/years"), "http://localhost:3000/api/v1/years");
    }

    #[test]
    fn session_user_role() {
        let user: SessionUser = serde_json::from_value(serde_json::json!({
            "id": 1,
            "username": "financeiro",
            "name": "JML Admin",
            "role": "admin"
        }))
        .unwrap();
        assert!(user.is_admin());
    }
}
