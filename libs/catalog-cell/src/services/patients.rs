use std::sync::Arc;
use tracing::{debug, info};

use shared_models::catalog::{EntityStatus, Patient};
use shared_models::error::AppError;
use shared_store::{next_id, ClinicStore, PATIENTS};

use crate::models::{NewPatient, PatientUpdate};

pub struct PatientService {
    store: Arc<ClinicStore>,
}

impl PatientService {
    pub fn new(store: Arc<ClinicStore>) -> Self {
        Self { store }
    }

    pub fn register(&self, request: NewPatient) -> Result<Patient, AppError> {
        debug!("Registering patient dni={}", request.dni);

        self.store.mutate(&[PATIENTS], |data| {
            let patient = Patient {
                id: next_id(data.patients.iter().map(|p| p.id)),
                dni: request.dni,
                first_name: request.first_name,
                last_name: request.last_name,
                birth_date: request.birth_date,
                insurance: request.insurance,
                phone: request.phone,
                address: request.address,
                email: request.email,
                status: EntityStatus::Active,
            };
            data.patients.push(patient.clone());
            info!("Registered patient {} ({})", patient.id, patient.full_name());
            Ok(patient)
        })
    }

    pub fn update(&self, id: i64, update: PatientUpdate) -> Result<Patient, AppError> {
        self.store.mutate(&[PATIENTS], |data| {
            let patient = data
                .patients
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| AppError::NotFound(format!("patient {id} not found")))?;

            if let Some(dni) = update.dni {
                patient.dni = dni;
            }
            if let Some(first_name) = update.first_name {
                patient.first_name = first_name;
            }
            if let Some(last_name) = update.last_name {
                patient.last_name = last_name;
            }
            if let Some(birth_date) = update.birth_date {
                patient.birth_date = birth_date;
            }
            if let Some(insurance) = update.insurance {
                patient.insurance = insurance;
            }
            if let Some(phone) = update.phone {
                patient.phone = phone;
            }
            if let Some(address) = update.address {
                patient.address = address;
            }
            if let Some(email) = update.email {
                patient.email = email;
            }
            if let Some(status) = update.status {
                patient.status = status;
            }

            Ok(patient.clone())
        })
    }

    /// Hard removal. Appointments keep their `patient_id`; downstream lookups
    /// resolve the dangling reference to "not found".
    pub fn remove(&self, id: i64) -> Result<(), AppError> {
        self.store.mutate(&[PATIENTS], |data| {
            let before = data.patients.len();
            data.patients.retain(|p| p.id != id);
            if data.patients.len() == before {
                return Err(AppError::NotFound(format!("patient {id} not found")));
            }
            info!("Removed patient {}", id);
            Ok(())
        })
    }

    pub fn get(&self, id: i64) -> Result<Option<Patient>, AppError> {
        let data = self.store.read()?;
        Ok(data.patients.iter().find(|p| p.id == id).cloned())
    }

    pub fn list(&self) -> Result<Vec<Patient>, AppError> {
        let data = self.store.read()?;
        Ok(data.patients.clone())
    }
}
