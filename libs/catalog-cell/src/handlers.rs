use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;
use shared_store::ClinicStore;

use crate::models::{
    NewOffice, NewPatient, NewProfessional, NewSpecialty, OfficeUpdate, PatientUpdate,
    ProfessionalUpdate, SpecialtyUpdate,
};
use crate::services::offices::OfficeService;
use crate::services::patients::PatientService;
use crate::services::professionals::ProfessionalService;
use crate::services::specialties::SpecialtyService;

// ==============================================================================
// PATIENT HANDLERS
// ==============================================================================

pub async fn register_patient(
    State(store): State<Arc<ClinicStore>>,
    Json(request): Json<NewPatient>,
) -> Result<Json<Value>, AppError> {
    let patient = PatientService::new(store).register(request)?;
    Ok(Json(json!({ "success": true, "patient": patient })))
}

pub async fn list_patients(
    State(store): State<Arc<ClinicStore>>,
) -> Result<Json<Value>, AppError> {
    let patients = PatientService::new(store).list()?;
    Ok(Json(json!({ "patients": patients })))
}

pub async fn get_patient(
    State(store): State<Arc<ClinicStore>>,
    Path(patient_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let patient = PatientService::new(store)
        .get(patient_id)?
        .ok_or_else(|| AppError::NotFound(format!("patient {patient_id} not found")))?;
    Ok(Json(json!({ "patient": patient })))
}

pub async fn update_patient(
    State(store): State<Arc<ClinicStore>>,
    Path(patient_id): Path<i64>,
    Json(update): Json<PatientUpdate>,
) -> Result<Json<Value>, AppError> {
    let patient = PatientService::new(store).update(patient_id, update)?;
    Ok(Json(json!({ "success": true, "patient": patient })))
}

pub async fn delete_patient(
    State(store): State<Arc<ClinicStore>>,
    Path(patient_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    PatientService::new(store).remove(patient_id)?;
    Ok(Json(json!({ "success": true })))
}

// ==============================================================================
// SPECIALTY HANDLERS
// ==============================================================================

pub async fn create_specialty(
    State(store): State<Arc<ClinicStore>>,
    Json(request): Json<NewSpecialty>,
) -> Result<Json<Value>, AppError> {
    let specialty = SpecialtyService::new(store).create(request)?;
    Ok(Json(json!({ "success": true, "specialty": specialty })))
}

pub async fn list_specialties(
    State(store): State<Arc<ClinicStore>>,
) -> Result<Json<Value>, AppError> {
    let specialties = SpecialtyService::new(store).list()?;
    Ok(Json(json!({ "specialties": specialties })))
}

pub async fn get_specialty(
    State(store): State<Arc<ClinicStore>>,
    Path(specialty_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let specialty = SpecialtyService::new(store)
        .get(specialty_id)?
        .ok_or_else(|| AppError::NotFound(format!("specialty {specialty_id} not found")))?;
    Ok(Json(json!({ "specialty": specialty })))
}

pub async fn update_specialty(
    State(store): State<Arc<ClinicStore>>,
    Path(specialty_id): Path<i64>,
    Json(update): Json<SpecialtyUpdate>,
) -> Result<Json<Value>, AppError> {
    let specialty = SpecialtyService::new(store).update(specialty_id, update)?;
    Ok(Json(json!({ "success": true, "specialty": specialty })))
}

pub async fn delete_specialty(
    State(store): State<Arc<ClinicStore>>,
    Path(specialty_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    SpecialtyService::new(store).remove(specialty_id)?;
    Ok(Json(json!({ "success": true })))
}

// ==============================================================================
// PROFESSIONAL HANDLERS
// ==============================================================================

pub async fn register_professional(
    State(store): State<Arc<ClinicStore>>,
    Json(request): Json<NewProfessional>,
) -> Result<Json<Value>, AppError> {
    let professional = ProfessionalService::new(store).register(request)?;
    Ok(Json(json!({ "success": true, "professional": professional })))
}

pub async fn list_professionals(
    State(store): State<Arc<ClinicStore>>,
) -> Result<Json<Value>, AppError> {
    let professionals = ProfessionalService::new(store).list()?;
    Ok(Json(json!({ "professionals": professionals })))
}

pub async fn get_professional(
    State(store): State<Arc<ClinicStore>>,
    Path(professional_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let professional = ProfessionalService::new(store)
        .get(professional_id)?
        .ok_or_else(|| AppError::NotFound(format!("professional {professional_id} not found")))?;
    Ok(Json(json!({ "professional": professional })))
}

pub async fn list_professionals_by_specialty(
    State(store): State<Arc<ClinicStore>>,
    Path(specialty_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let professionals = ProfessionalService::new(store).list_by_specialty(specialty_id)?;
    Ok(Json(json!({ "professionals": professionals })))
}

pub async fn update_professional(
    State(store): State<Arc<ClinicStore>>,
    Path(professional_id): Path<i64>,
    Json(update): Json<ProfessionalUpdate>,
) -> Result<Json<Value>, AppError> {
    let professional = ProfessionalService::new(store).update(professional_id, update)?;
    Ok(Json(json!({ "success": true, "professional": professional })))
}

pub async fn delete_professional(
    State(store): State<Arc<ClinicStore>>,
    Path(professional_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    ProfessionalService::new(store).remove(professional_id)?;
    Ok(Json(json!({ "success": true })))
}

// ==============================================================================
// OFFICE HANDLERS
// ==============================================================================

pub async fn create_office(
    State(store): State<Arc<ClinicStore>>,
    Json(request): Json<NewOffice>,
) -> Result<Json<Value>, AppError> {
    let office = OfficeService::new(store).create(request)?;
    Ok(Json(json!({ "success": true, "office": office })))
}

pub async fn list_offices(
    State(store): State<Arc<ClinicStore>>,
) -> Result<Json<Value>, AppError> {
    let offices = OfficeService::new(store).list()?;
    Ok(Json(json!({ "offices": offices })))
}

pub async fn get_office(
    State(store): State<Arc<ClinicStore>>,
    Path(office_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let office = OfficeService::new(store)
        .get(office_id)?
        .ok_or_else(|| AppError::NotFound(format!("office {office_id} not found")))?;
    Ok(Json(json!({ "office": office })))
}

pub async fn update_office(
    State(store): State<Arc<ClinicStore>>,
    Path(office_id): Path<i64>,
    Json(update): Json<OfficeUpdate>,
) -> Result<Json<Value>, AppError> {
    let office = OfficeService::new(store).update(office_id, update)?;
    Ok(Json(json!({ "success": true, "office": office })))
}

pub async fn delete_office(
    State(store): State<Arc<ClinicStore>>,
    Path(office_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    OfficeService::new(store).remove(office_id)?;
    Ok(Json(json!({ "success": true })))
}
