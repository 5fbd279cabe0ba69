use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use shared_store::ClinicStore;

use crate::handlers;

pub fn appointment_routes(store: Arc<ClinicStore>) -> Router {
    Router::new()
        .route(
            "/",
            post(handlers::book_appointment).get(handlers::list_appointments),
        )
        .route("/slots", get(handlers::get_slots))
        .route("/availability", get(handlers::check_availability))
        .route(
            "/{appointment_id}",
            get(handlers::get_appointment).delete(handlers::delete_appointment),
        )
        .route("/{appointment_id}/status", patch(handlers::update_status))
        .route("/{appointment_id}/cancel", post(handlers::cancel_appointment))
        .route(
            "/{appointment_id}/reschedule",
            patch(handlers::reschedule_appointment),
        )
        .with_state(store)
}
