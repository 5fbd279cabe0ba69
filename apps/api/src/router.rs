use std::sync::Arc;

use axum::{routing::get, Router};

use attention_cell::router::attention_routes;
use catalog_cell::router::{office_routes, patient_routes, professional_routes, specialty_routes};
use scheduling_cell::router::appointment_routes;
use shared_store::ClinicStore;
use waiting_room_cell::router::waiting_room_routes;

pub fn create_router(store: Arc<ClinicStore>) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic desk API is running!" }))
        .nest("/patients", patient_routes(store.clone()))
        .nest("/specialties", specialty_routes(store.clone()))
        .nest("/professionals", professional_routes(store.clone()))
        .nest("/offices", office_routes(store.clone()))
        .nest("/appointments", appointment_routes(store.clone()))
        .nest("/attentions", attention_routes(store.clone()))
        .nest("/waiting-room", waiting_room_routes(store))
}
