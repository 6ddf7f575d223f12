//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/history/{year_month}', use [format_endpoint].

/// The dashboard for the current month. Expenses are added by posting to it.
pub const ROOT: &str = "/";
/// The list of months that have expenses.
pub const HISTORY_VIEW: &str = "/history";
/// The budget for a single month.
pub const HISTORY_MONTH_VIEW: &str = "/history/{year_month}";
/// The page for viewing and updating income, savings goal and fixed costs.
pub const SETTINGS_VIEW: &str = "/settings";
/// The route to delete an expense from the current month.
pub const DELETE_EXPENSE: &str = "/delete/{expense_id}";
/// The route for static files.
pub const STATIC: &str = "/static";

/// Replace the parameter in `endpoint_path` with `value`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/delete/{expense_id}', '{expense_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// `endpoint_path` unchanged.
pub fn format_endpoint(endpoint_path: &str, value: impl std::fmt::Display) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        value,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::HISTORY_VIEW);
        assert_endpoint_is_valid_uri(endpoints::HISTORY_MONTH_VIEW);
        assert_endpoint_is_valid_uri(endpoints::SETTINGS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::DELETE_EXPENSE);
        assert_endpoint_is_valid_uri(endpoints::STATIC);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint(endpoints::DELETE_EXPENSE, 1);

        assert_eq!(formatted_path, "/delete/1");
        assert!(formatted_path.parse::<Uri>().is_ok());

        let formatted_path = format_endpoint(endpoints::HISTORY_MONTH_VIEW, "2025-03");

        assert_eq!(formatted_path, "/history/2025-03");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_path_unchanged_with_no_parameter() {
        let formatted_path = format_endpoint("/hello/world", 1);

        assert_eq!(formatted_path, "/hello/world");
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint("/hello/{world}/bye", 1);

        assert_eq!(formatted_path, "/hello/1/bye");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }
}
