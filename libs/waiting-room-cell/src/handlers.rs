use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::{json, Value};

use shared_models::error::AppError;
use shared_store::ClinicStore;

use crate::services::board::WaitingRoomService;

#[derive(Debug, Deserialize)]
pub struct BoardQuery {
    pub date: Option<NaiveDate>,
}

pub async fn get_board(
    State(store): State<Arc<ClinicStore>>,
    Query(query): Query<BoardQuery>,
) -> Result<Json<Value>, AppError> {
    let now = Local::now().naive_local();
    let date = query.date.unwrap_or_else(|| now.date());
    let board = WaitingRoomService::new(store).board(date, now)?;
    Ok(Json(json!({ "board": board })))
}
