use std::sync::Arc;
use tracing::{debug, info};

use shared_models::catalog::{EntityStatus, Professional};
use shared_models::error::AppError;
use shared_store::{next_id, ClinicStore, PROFESSIONALS};

use crate::models::{NewProfessional, ProfessionalUpdate};

pub struct ProfessionalService {
    store: Arc<ClinicStore>,
}

impl ProfessionalService {
    pub fn new(store: Arc<ClinicStore>) -> Self {
        Self { store }
    }

    pub fn register(&self, request: NewProfessional) -> Result<Professional, AppError> {
        debug!("Registering professional {}", request.full_name);

        self.store.mutate(&[PROFESSIONALS], |data| {
            let professional = Professional {
                id: next_id(data.professionals.iter().map(|p| p.id)),
                full_name: request.full_name,
                license: request.license,
                specialty_id: request.specialty_id,
                work_days: request.work_days,
                work_hours: request.work_hours,
                office: request.office,
                status: EntityStatus::Active,
            };
            data.professionals.push(professional.clone());
            info!(
                "Registered professional {} ({})",
                professional.id, professional.full_name
            );
            Ok(professional)
        })
    }

    pub fn update(&self, id: i64, update: ProfessionalUpdate) -> Result<Professional, AppError> {
        self.store.mutate(&[PROFESSIONALS], |data| {
            let professional = data
                .professionals
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| AppError::NotFound(format!("professional {id} not found")))?;

            if let Some(full_name) = update.full_name {
                professional.full_name = full_name;
            }
            if let Some(license) = update.license {
                professional.license = license;
            }
            if let Some(specialty_id) = update.specialty_id {
                professional.specialty_id = specialty_id;
            }
            if let Some(work_days) = update.work_days {
                professional.work_days = work_days;
            }
            if let Some(work_hours) = update.work_hours {
                professional.work_hours = work_hours;
            }
            if let Some(office) = update.office {
                professional.office = office;
            }
            if let Some(status) = update.status {
                professional.status = status;
            }

            Ok(professional.clone())
        })
    }

    pub fn remove(&self, id: i64) -> Result<(), AppError> {
        self.store.mutate(&[PROFESSIONALS], |data| {
            let before = data.professionals.len();
            data.professionals.retain(|p| p.id != id);
            if data.professionals.len() == before {
                return Err(AppError::NotFound(format!("professional {id} not found")));
            }
            Ok(())
        })
    }

    pub fn get(&self, id: i64) -> Result<Option<Professional>, AppError> {
        let data = self.store.read()?;
        Ok(data.professionals.iter().find(|p| p.id == id).cloned())
    }

    pub fn list(&self) -> Result<Vec<Professional>, AppError> {
        let data = self.store.read()?;
        Ok(data.professionals.clone())
    }

    /// Active professionals only; inactive ones are not bookable.
    pub fn list_by_specialty(&self, specialty_id: i64) -> Result<Vec<Professional>, AppError> {
        let data = self.store.read()?;
        Ok(data
            .professionals
            .iter()
            .filter(|p| p.specialty_id == specialty_id && p.status == EntityStatus::Active)
            .cloned()
            .collect())
    }
}
