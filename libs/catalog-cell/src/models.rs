use chrono::NaiveDate;
use serde::Deserialize;

use shared_models::catalog::{EntityStatus, WorkDay, WorkHours};

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct NewPatient {
    pub dni: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub insurance: String,
    pub phone: String,
    pub address: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientUpdate {
    pub dni: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub insurance: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub status: Option<EntityStatus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSpecialty {
    pub name: String,
    pub duration_minutes: i64,
    #[serde(default)]
    pub allow_overbooking: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpecialtyUpdate {
    pub name: Option<String>,
    pub duration_minutes: Option<i64>,
    pub allow_overbooking: Option<bool>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewProfessional {
    pub full_name: String,
    pub license: String,
    pub specialty_id: i64,
    pub work_days: Vec<WorkDay>,
    pub work_hours: WorkHours,
    pub office: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfessionalUpdate {
    pub full_name: Option<String>,
    pub license: Option<String>,
    pub specialty_id: Option<i64>,
    pub work_days: Option<Vec<WorkDay>>,
    pub work_hours: Option<WorkHours>,
    pub office: Option<String>,
    pub status: Option<EntityStatus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewOffice {
    pub name: String,
    pub location: String,
    pub capacity: i64,
    #[serde(default)]
    pub equipment: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OfficeUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub capacity: Option<i64>,
    pub equipment: Option<Vec<String>>,
    pub status: Option<EntityStatus>,
}
