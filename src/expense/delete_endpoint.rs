//! Defines the endpoint for deleting an expense from the current month.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::Serialize;

use crate::{
    AppState, Error,
    budget::{BudgetSummary, StatusColor, compute_budget},
    expense::{ExpenseId, delete_expense, sum_expenses_for_month},
    settings::SettingsStore,
    timezone::current_month,
};

/// The state needed to delete an expense.
#[derive(Debug, Clone)]
pub struct DeleteExpenseState {
    /// The local timezone as a canonical timezone name, e.g. "Asia/Tokyo".
    pub local_timezone: String,
    /// The database connection for managing expenses.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The settings used to recompute the budget after a delete.
    pub settings_store: Arc<dyn SettingsStore>,
}

impl FromRef<AppState> for DeleteExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
            db_connection: state.db_connection.clone(),
            settings_store: state.settings_store.clone(),
        }
    }
}

/// The refreshed figures for the current month after a successful delete.
#[derive(Debug, Serialize)]
struct DeleteSuccess {
    success: bool,
    free_balance: i64,
    total_saving: i64,
    used_amount: i64,
    remain_ratio: i64,
    status_color: StatusColor,
}

impl From<BudgetSummary> for DeleteSuccess {
    fn from(summary: BudgetSummary) -> Self {
        Self {
            success: true,
            free_balance: summary.free_balance,
            total_saving: summary.total_saving,
            used_amount: summary.used_amount,
            remain_ratio: summary.remain_ratio,
            status_color: summary.status_color,
        }
    }
}

#[derive(Debug, Serialize)]
struct DeleteFailure {
    success: bool,
    message: String,
}

/// A route handler for deleting an expense, responds with JSON.
///
/// Only expenses from the current month can be deleted. On success the
/// response carries the recomputed budget for the current month so the page
/// can be updated in place.
///
/// An ID that is not an integer cannot match any expense and gets the same
/// JSON failure as a missing one.
pub async fn delete_expense_endpoint(
    State(state): State<DeleteExpenseState>,
    Path(raw_id): Path<String>,
) -> Response {
    let Ok(expense_id) = raw_id.parse::<ExpenseId>() else {
        tracing::debug!("Ignoring delete request for malformed expense ID {raw_id:?}");
        return delete_failure_response(&raw_id, Error::DeleteMissingExpense);
    };

    match delete_and_recompute(expense_id, &state) {
        Ok(summary) => Json(DeleteSuccess::from(summary)).into_response(),
        Err(error) => delete_failure_response(&raw_id, error),
    }
}

fn delete_and_recompute(
    expense_id: ExpenseId,
    state: &DeleteExpenseState,
) -> Result<BudgetSummary, Error> {
    let current_month = current_month(&state.local_timezone)?;

    let used_amount = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        delete_expense(expense_id, current_month, &connection)?;
        tracing::info!("Deleted expense {expense_id} from {current_month}");

        sum_expenses_for_month(current_month, &connection)?
    };

    let settings = state.settings_store.load()?;

    Ok(compute_budget(&settings, used_amount))
}

fn delete_failure_response(expense_id: &str, error: Error) -> Response {
    let (status, message) = match error {
        Error::DeleteMissingExpense => (
            StatusCode::NOT_FOUND,
            "The expense could not be found. \
            Try refreshing the page to see if it has already been deleted."
                .to_owned(),
        ),
        Error::PastMonthProtected(year_month) => (
            StatusCode::FORBIDDEN,
            format!("Expenses from {year_month} can no longer be deleted."),
        ),
        error => {
            tracing::error!("Could not delete expense {expense_id}: {error}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred, check the server logs for more details.".to_owned(),
            )
        }
    };

    (
        status,
        Json(DeleteFailure {
            success: false,
            message,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod delete_expense_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{Router, http::StatusCode, routing::post};
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};
    use time::{Date, Month, OffsetDateTime};

    use crate::{
        endpoints::{self, format_endpoint},
        expense::{
            NewExpense, create_expense_table, delete_expense_endpoint, get_expense, insert_expense,
        },
        settings::{InMemorySettingsStore, Settings},
    };

    use super::DeleteExpenseState;

    fn get_test_state() -> DeleteExpenseState {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        create_expense_table(&connection).expect("Could not create expense table");

        DeleteExpenseState {
            local_timezone: "Etc/UTC".to_owned(),
            db_connection: Arc::new(Mutex::new(connection)),
            settings_store: Arc::new(InMemorySettingsStore::with_settings(Settings {
                rent: 50_000,
                ..Settings::default()
            })),
        }
    }

    fn get_test_server(state: DeleteExpenseState) -> TestServer {
        let app = Router::new()
            .route(endpoints::DELETE_EXPENSE, post(delete_expense_endpoint))
            .with_state(state);

        TestServer::try_new(app).expect("Could not create test server.")
    }

    fn today() -> Date {
        OffsetDateTime::now_utc().date()
    }

    fn a_previous_month() -> Date {
        let today = today();
        let (year, month) = match today.month() {
            Month::January => (today.year() - 1, Month::December),
            month => (today.year(), month.previous()),
        };

        Date::from_calendar_date(year, month, 1).unwrap()
    }

    #[tokio::test]
    async fn delete_returns_recomputed_budget() {
        let state = get_test_state();
        let (kept, deleted) = {
            let connection = state.db_connection.lock().unwrap();
            let kept =
                insert_expense(NewExpense::recorded_on(today(), 47_500, "food"), &connection)
                    .unwrap();
            let deleted =
                insert_expense(NewExpense::recorded_on(today(), 10_000, "shoes"), &connection)
                    .unwrap();
            (kept, deleted)
        };
        let server = get_test_server(state.clone());

        let response = server
            .post(&format_endpoint(endpoints::DELETE_EXPENSE, deleted.id))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "success": true,
            "free_balance": 47_500,
            "total_saving": 87_500,
            "used_amount": kept.amount,
            "remain_ratio": 50,
            "status_color": "yellow",
        }));
    }

    #[tokio::test]
    async fn delete_missing_expense_returns_not_found() {
        let server = get_test_server(get_test_state());

        let response = server
            .post(&format_endpoint(endpoints::DELETE_EXPENSE, 999))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["success"], json!(false));
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn delete_with_malformed_id_returns_not_found_json() {
        let server = get_test_server(get_test_state());

        for raw_id in ["abc", "1.5", "99999999999999999999"] {
            let response = server
                .post(&format_endpoint(endpoints::DELETE_EXPENSE, raw_id))
                .await;

            response.assert_status(StatusCode::NOT_FOUND);
            let body: Value = response.json();
            assert_eq!(body["success"], json!(false), "for ID {raw_id:?}");
            assert!(body["message"].is_string(), "for ID {raw_id:?}");
        }
    }

    #[tokio::test]
    async fn delete_past_month_expense_is_forbidden_and_kept() {
        let state = get_test_state();
        let expense = insert_expense(
            NewExpense::recorded_on(a_previous_month(), 1_000, "old"),
            &state.db_connection.lock().unwrap(),
        )
        .unwrap();
        let server = get_test_server(state.clone());

        let response = server
            .post(&format_endpoint(endpoints::DELETE_EXPENSE, expense.id))
            .await;

        response.assert_status(StatusCode::FORBIDDEN);
        let body: Value = response.json();
        assert_eq!(body["success"], json!(false));
        assert_eq!(
            get_expense(expense.id, &state.db_connection.lock().unwrap()),
            Ok(expense)
        );
    }

    #[tokio::test]
    async fn invalid_timezone_returns_server_error() {
        let state = DeleteExpenseState {
            local_timezone: "Not/AZone".to_owned(),
            ..get_test_state()
        };
        let server = get_test_server(state);

        let response = server
            .post(&format_endpoint(endpoints::DELETE_EXPENSE, 1))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["success"], json!(false));
    }
}
