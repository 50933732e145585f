use axum::routing::{get, post};
use axum::Router;

use scorm_protocol::endpoints;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all bridge endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::GET_VALUE, post(handler::get_value_handler))
        .route(endpoints::SET_VALUES, post(handler::set_values_handler))
        .route(endpoints::SET_VALUE, post(handler::set_value_handler))
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::INFO, get(handler::info_handler))
        .with_state(state)
}
