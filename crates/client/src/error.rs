use finboard_core::types::{MonthNumber, YearNumber};

/// Errors raised by the API client and the dashboard state.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The signed-in account lacks the role for this action.
    #[error("Not permitted: {0}")]
    Forbidden(&'static str),

    #[error("No edit in progress")]
    NotEditing,

    #[error("Month {year}/{month} is not loaded")]
    MonthNotLoaded {
        year: YearNumber,
        month: MonthNumber,
    },
}

impl ClientError {
    /// HTTP status of an API error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
