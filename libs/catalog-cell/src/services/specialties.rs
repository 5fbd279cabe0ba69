use std::sync::Arc;
use tracing::{debug, info};

use shared_models::catalog::Specialty;
use shared_models::error::AppError;
use shared_store::{next_id, ClinicStore, SPECIALTIES};

use crate::models::{NewSpecialty, SpecialtyUpdate};

pub struct SpecialtyService {
    store: Arc<ClinicStore>,
}

impl SpecialtyService {
    pub fn new(store: Arc<ClinicStore>) -> Self {
        Self { store }
    }

    pub fn create(&self, request: NewSpecialty) -> Result<Specialty, AppError> {
        validate_duration(request.duration_minutes)?;
        debug!("Creating specialty {}", request.name);

        self.store.mutate(&[SPECIALTIES], |data| {
            let specialty = Specialty {
                id: next_id(data.specialties.iter().map(|s| s.id)),
                name: request.name,
                duration_minutes: request.duration_minutes,
                allow_overbooking: request.allow_overbooking,
                description: request.description,
            };
            data.specialties.push(specialty.clone());
            info!("Created specialty {} ({})", specialty.id, specialty.name);
            Ok(specialty)
        })
    }

    pub fn update(&self, id: i64, update: SpecialtyUpdate) -> Result<Specialty, AppError> {
        if let Some(duration_minutes) = update.duration_minutes {
            validate_duration(duration_minutes)?;
        }

        self.store.mutate(&[SPECIALTIES], |data| {
            let specialty = data
                .specialties
                .iter_mut()
                .find(|s| s.id == id)
                .ok_or_else(|| AppError::NotFound(format!("specialty {id} not found")))?;

            if let Some(name) = update.name {
                specialty.name = name;
            }
            if let Some(duration_minutes) = update.duration_minutes {
                specialty.duration_minutes = duration_minutes;
            }
            if let Some(allow_overbooking) = update.allow_overbooking {
                specialty.allow_overbooking = allow_overbooking;
            }
            if let Some(description) = update.description {
                specialty.description = description;
            }

            Ok(specialty.clone())
        })
    }

    pub fn remove(&self, id: i64) -> Result<(), AppError> {
        self.store.mutate(&[SPECIALTIES], |data| {
            let before = data.specialties.len();
            data.specialties.retain(|s| s.id != id);
            if data.specialties.len() == before {
                return Err(AppError::NotFound(format!("specialty {id} not found")));
            }
            Ok(())
        })
    }

    pub fn get(&self, id: i64) -> Result<Option<Specialty>, AppError> {
        let data = self.store.read()?;
        Ok(data.specialties.iter().find(|s| s.id == id).cloned())
    }

    pub fn list(&self) -> Result<Vec<Specialty>, AppError> {
        let data = self.store.read()?;
        Ok(data.specialties.clone())
    }
}

/// A non-positive duration would make the slot generator loop forever, so it
/// is rejected at the source of truth as well.
fn validate_duration(duration_minutes: i64) -> Result<(), AppError> {
    if duration_minutes <= 0 {
        return Err(AppError::Validation(format!(
            "specialty duration must be a positive number of minutes, got {duration_minutes}"
        )));
    }
    Ok(())
}
