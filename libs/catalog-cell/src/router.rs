use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_store::ClinicStore;

use crate::handlers;

pub fn patient_routes(store: Arc<ClinicStore>) -> Router {
    Router::new()
        .route(
            "/",
            post(handlers::register_patient).get(handlers::list_patients),
        )
        .route(
            "/{patient_id}",
            get(handlers::get_patient)
                .put(handlers::update_patient)
                .delete(handlers::delete_patient),
        )
        .with_state(store)
}

pub fn specialty_routes(store: Arc<ClinicStore>) -> Router {
    Router::new()
        .route(
            "/",
            post(handlers::create_specialty).get(handlers::list_specialties),
        )
        .route(
            "/{specialty_id}",
            get(handlers::get_specialty)
                .put(handlers::update_specialty)
                .delete(handlers::delete_specialty),
        )
        .with_state(store)
}

pub fn professional_routes(store: Arc<ClinicStore>) -> Router {
    Router::new()
        .route(
            "/",
            post(handlers::register_professional).get(handlers::list_professionals),
        )
        .route(
            "/specialty/{specialty_id}",
            get(handlers::list_professionals_by_specialty),
        )
        .route(
            "/{professional_id}",
            get(handlers::get_professional)
                .put(handlers::update_professional)
                .delete(handlers::delete_professional),
        )
        .with_state(store)
}

pub fn office_routes(store: Arc<ClinicStore>) -> Router {
    Router::new()
        .route(
            "/",
            post(handlers::create_office).get(handlers::list_offices),
        )
        .route(
            "/{office_id}",
            get(handlers::get_office)
                .put(handlers::update_office)
                .delete(handlers::delete_office),
        )
        .with_state(store)
}
