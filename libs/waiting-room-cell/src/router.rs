use std::sync::Arc;

use axum::{routing::get, Router};

use shared_store::ClinicStore;

use crate::handlers;

pub fn waiting_room_routes(store: Arc<ClinicStore>) -> Router {
    Router::new()
        .route("/", get(handlers::get_board))
        .with_state(store)
}
