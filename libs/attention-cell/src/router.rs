use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_store::ClinicStore;

use crate::handlers;

pub fn attention_routes(store: Arc<ClinicStore>) -> Router {
    Router::new()
        .route(
            "/",
            post(handlers::record_attention).get(handlers::list_attentions),
        )
        .route(
            "/patient/{patient_id}",
            get(handlers::list_attentions_by_patient),
        )
        .route(
            "/professional/{professional_id}",
            get(handlers::list_attentions_by_professional),
        )
        .route(
            "/{attention_id}",
            get(handlers::get_attention)
                .put(handlers::update_attention)
                .delete(handlers::delete_attention),
        )
        .with_state(store)
}
