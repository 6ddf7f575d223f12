//! Defines the app level error type and conversions to rendered HTML pages.
use axum::response::{IntoResponse, Response};

use crate::{
    internal_server_error::InternalServerError, not_found::NotFoundError, year_month::YearMonth,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to delete an expense that does not exist.
    #[error("tried to delete an expense that is not in the database")]
    DeleteMissingExpense,

    /// Tried to delete an expense from a month other than the current one.
    ///
    /// Only the current month can be changed, totals for earlier months are
    /// kept as they were.
    #[error("expenses from {0} can no longer be deleted")]
    PastMonthProtected(YearMonth),

    /// A month key that is not in the `YYYY-MM` format.
    #[error("\"{0}\" is not a valid month, expected YYYY-MM")]
    InvalidYearMonth(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The settings document exists but could not be read or parsed.
    #[error("could not read the settings: {0}")]
    SettingsReadError(String),

    /// The settings document could not be written.
    #[error("could not save the settings: {0}")]
    SettingsWriteError(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound | Error::InvalidYearMonth(_) => NotFoundError.into_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::SettingsReadError(_) => InternalServerError {
                description: "Could Not Load Settings",
                fix: "The settings file could not be read. Check that it is valid JSON \
                    and that the server can read it.",
            }
            .into_response(),
            Error::SettingsWriteError(_) => InternalServerError {
                description: "Save Failed",
                fix: "Failed to save your settings. Please try again.",
            }
            .into_response(),
            Error::DatabaseLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

#[cfg(test)]
mod error_response_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::Error;

    #[test]
    fn not_found_renders_404() {
        let response = Error::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_month_renders_404() {
        let response = Error::InvalidYearMonth("2025-13".to_owned()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_errors_render_500() {
        for error in [
            Error::DatabaseLockError,
            Error::SettingsReadError("denied".to_owned()),
            Error::SettingsWriteError("disk full".to_owned()),
            Error::SqlError(rusqlite::Error::InvalidQuery),
        ] {
            let response = error.into_response();

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn no_rows_converts_to_not_found() {
        assert_eq!(
            Error::from(rusqlite::Error::QueryReturnedNoRows),
            Error::NotFound
        );
    }
}
