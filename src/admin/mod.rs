pub mod auth;
pub mod handlers;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::http::server::AppState;
use self::auth::admin_auth_middleware;
use self::handlers::*;

pub fn setup_admin_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/admin/metrics", get(get_metrics))
        .route("/admin/reset", post(reset_metrics))
        .route_layer(middleware::from_fn_with_state(state, admin_auth_middleware))
}
