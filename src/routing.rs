//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    dashboard::{add_expense_endpoint, get_dashboard_page},
    endpoints,
    expense::delete_expense_endpoint,
    history::{get_history_month_page, get_history_page},
    not_found::get_404_not_found,
    settings::{get_settings_page, update_settings_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::ROOT,
            get(get_dashboard_page).post(add_expense_endpoint),
        )
        .route(endpoints::HISTORY_VIEW, get(get_history_page))
        .route(endpoints::HISTORY_MONTH_VIEW, get(get_history_month_page))
        .route(endpoints::DELETE_EXPENSE, post(delete_expense_endpoint))
        .route(
            endpoints::SETTINGS_VIEW,
            get(get_settings_page).post(update_settings_endpoint),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}
