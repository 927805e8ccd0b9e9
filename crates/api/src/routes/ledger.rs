//! Route definitions for the category, year, month, and summary endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::fallback::method_not_allowed;
use crate::handlers::{catalog, ledger, summary};
use crate::state::AppState;

/// ```text
/// GET        /categories
/// GET, POST  /years
/// GET        /year
/// GET, PUT   /month
/// GET        /summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(catalog::list_categories).fallback(method_not_allowed),
        )
        .route(
            "/years",
            get(ledger::list_years)
                .post(ledger::create_year)
                .fallback(method_not_allowed),
        )
        .route("/year", get(ledger::get_year).fallback(method_not_allowed))
        .route(
            "/month",
            get(ledger::get_month)
                .put(ledger::update_month)
                .fallback(method_not_allowed),
        )
        .route(
            "/summary",
            get(summary::get_summary).fallback(method_not_allowed),
        )
}
