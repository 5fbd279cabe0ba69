use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use shared_models::appointment::{AppointmentKind, AppointmentStatus};
use shared_models::error::AppError;
use shared_store::StoreError;

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

/// A candidate start time in a professional's day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    #[serde(with = "shared_models::timefmt")]
    pub time: NaiveTime,
    pub available: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookAppointmentRequest {
    pub patient_id: i64,
    pub professional_id: i64,
    pub specialty_id: i64,
    pub date: NaiveDate,
    #[serde(with = "shared_models::timefmt")]
    pub time: NaiveTime,
    #[serde(rename = "type", default)]
    pub kind: AppointmentKind,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CancelAppointmentRequest {
    pub reason: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RescheduleAppointmentRequest {
    pub new_date: NaiveDate,
    #[serde(with = "shared_models::timefmt")]
    pub new_time: NaiveTime,
    pub reason: String,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SchedulingError {
    #[error("Appointment not found")]
    AppointmentNotFound,

    #[error("Patient not found")]
    PatientNotFound,

    #[error("Professional not found")]
    ProfessionalNotFound,

    #[error("Specialty not found")]
    SpecialtyNotFound,

    #[error("Appointment slot not available")]
    SlotUnavailable,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl From<SchedulingError> for AppError {
    fn from(err: SchedulingError) -> Self {
        match err {
            SchedulingError::AppointmentNotFound
            | SchedulingError::PatientNotFound
            | SchedulingError::ProfessionalNotFound
            | SchedulingError::SpecialtyNotFound => AppError::NotFound(err.to_string()),
            SchedulingError::SlotUnavailable => AppError::Conflict(err.to_string()),
            SchedulingError::Validation(msg) => AppError::Validation(msg),
            SchedulingError::Storage(source) => AppError::Storage(source.to_string()),
        }
    }
}
