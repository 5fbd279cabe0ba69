use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use serde_json::{json, Value};

use shared_models::error::AppError;
use shared_store::ClinicStore;

use crate::models::{
    BookAppointmentRequest, CancelAppointmentRequest, RescheduleAppointmentRequest,
    UpdateStatusRequest,
};
use crate::services::ledger::AppointmentLedger;

// ==============================================================================
// QUERY PARAMETER STRUCTS
// ==============================================================================

#[derive(Debug, Deserialize)]
pub struct SlotQuery {
    pub professional_id: i64,
    pub date: NaiveDate,
    pub exclude_appointment_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub professional_id: i64,
    pub date: NaiveDate,
    #[serde(with = "shared_models::timefmt")]
    pub time: NaiveTime,
    pub exclude_appointment_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct AppointmentListQuery {
    pub date: NaiveDate,
    pub professional_id: Option<i64>,
}

// ==============================================================================
// HANDLERS
// ==============================================================================

pub async fn get_slots(
    State(store): State<Arc<ClinicStore>>,
    Query(query): Query<SlotQuery>,
) -> Result<Json<Value>, AppError> {
    let slots = AppointmentLedger::new(store).slots_for(
        query.professional_id,
        query.date,
        query.exclude_appointment_id,
    )?;
    Ok(Json(json!({
        "professional_id": query.professional_id,
        "date": query.date,
        "slots": slots
    })))
}

pub async fn check_availability(
    State(store): State<Arc<ClinicStore>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Value>, AppError> {
    let available = AppointmentLedger::new(store).check_availability(
        query.professional_id,
        query.date,
        query.time,
        query.exclude_appointment_id,
    )?;
    Ok(Json(json!({ "available": available })))
}

pub async fn book_appointment(
    State(store): State<Arc<ClinicStore>>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let appointment = AppointmentLedger::new(store).book(request)?;
    Ok(Json(json!({ "success": true, "appointment": appointment })))
}

pub async fn list_appointments(
    State(store): State<Arc<ClinicStore>>,
    Query(query): Query<AppointmentListQuery>,
) -> Result<Json<Value>, AppError> {
    let ledger = AppointmentLedger::new(store);
    let appointments = match query.professional_id {
        Some(professional_id) => ledger.for_professional(professional_id, Some(query.date))?,
        None => ledger.for_date(query.date)?,
    };
    Ok(Json(json!({ "appointments": appointments })))
}

pub async fn get_appointment(
    State(store): State<Arc<ClinicStore>>,
    Path(appointment_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let appointment = AppointmentLedger::new(store)
        .get(appointment_id)?
        .ok_or_else(|| AppError::NotFound(format!("appointment {appointment_id} not found")))?;
    Ok(Json(json!({ "appointment": appointment })))
}

pub async fn update_status(
    State(store): State<Arc<ClinicStore>>,
    Path(appointment_id): Path<i64>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Value>, AppError> {
    let appointment = AppointmentLedger::new(store).update_status(appointment_id, request.status)?;
    Ok(Json(json!({ "success": true, "appointment": appointment })))
}

pub async fn cancel_appointment(
    State(store): State<Arc<ClinicStore>>,
    Path(appointment_id): Path<i64>,
    Json(request): Json<CancelAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let appointment = AppointmentLedger::new(store).cancel(appointment_id, &request.reason)?;
    Ok(Json(json!({ "success": true, "appointment": appointment })))
}

pub async fn reschedule_appointment(
    State(store): State<Arc<ClinicStore>>,
    Path(appointment_id): Path<i64>,
    Json(request): Json<RescheduleAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let appointment = AppointmentLedger::new(store).reschedule(
        appointment_id,
        request.new_date,
        request.new_time,
        &request.reason,
    )?;
    Ok(Json(json!({ "success": true, "appointment": appointment })))
}

pub async fn delete_appointment(
    State(store): State<Arc<ClinicStore>>,
    Path(appointment_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    AppointmentLedger::new(store).delete(appointment_id)?;
    Ok(Json(json!({ "success": true })))
}
