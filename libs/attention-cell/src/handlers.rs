use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use shared_models::error::AppError;
use shared_store::ClinicStore;

use crate::models::{MedicalAttentionUpdate, NewMedicalAttention};
use crate::services::attentions::AttentionService;

#[derive(Debug, Deserialize)]
pub struct AttentionListQuery {
    pub date: Option<NaiveDate>,
}

pub async fn record_attention(
    State(store): State<Arc<ClinicStore>>,
    Json(request): Json<NewMedicalAttention>,
) -> Result<Json<Value>, AppError> {
    let attention = AttentionService::new(store).record(request)?;
    Ok(Json(json!({ "success": true, "attention": attention })))
}

pub async fn list_attentions(
    State(store): State<Arc<ClinicStore>>,
    Query(query): Query<AttentionListQuery>,
) -> Result<Json<Value>, AppError> {
    let service = AttentionService::new(store);
    let attentions = match query.date {
        Some(date) => service.for_date(date)?,
        None => service.list()?,
    };
    Ok(Json(json!({ "attentions": attentions })))
}

pub async fn get_attention(
    State(store): State<Arc<ClinicStore>>,
    Path(attention_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let attention = AttentionService::new(store)
        .get(attention_id)?
        .ok_or_else(|| AppError::NotFound(format!("attention {attention_id} not found")))?;
    Ok(Json(json!({ "attention": attention })))
}

pub async fn list_attentions_by_patient(
    State(store): State<Arc<ClinicStore>>,
    Path(patient_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let attentions = AttentionService::new(store).for_patient(patient_id)?;
    Ok(Json(json!({ "attentions": attentions })))
}

pub async fn list_attentions_by_professional(
    State(store): State<Arc<ClinicStore>>,
    Path(professional_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let attentions = AttentionService::new(store).for_professional(professional_id)?;
    Ok(Json(json!({ "attentions": attentions })))
}

pub async fn update_attention(
    State(store): State<Arc<ClinicStore>>,
    Path(attention_id): Path<i64>,
    Json(update): Json<MedicalAttentionUpdate>,
) -> Result<Json<Value>, AppError> {
    let attention = AttentionService::new(store).update(attention_id, update)?;
    Ok(Json(json!({ "success": true, "attention": attention })))
}

pub async fn delete_attention(
    State(store): State<Arc<ClinicStore>>,
    Path(attention_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    AttentionService::new(store).remove(attention_id)?;
    Ok(Json(json!({ "success": true })))
}
