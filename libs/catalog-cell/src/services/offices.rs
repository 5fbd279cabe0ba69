use std::sync::Arc;
use chrono::Utc;
use tracing::{debug, info, warn};

use shared_models::catalog::{EntityStatus, Office};
use shared_models::error::AppError;
use shared_store::{next_id, ClinicData, ClinicStore, OFFICES};

use crate::models::{NewOffice, OfficeUpdate};

pub struct OfficeService {
    store: Arc<ClinicStore>,
}

impl OfficeService {
    pub fn new(store: Arc<ClinicStore>) -> Self {
        Self { store }
    }

    pub fn create(&self, request: NewOffice) -> Result<Office, AppError> {
        debug!("Creating office {}", request.name);

        self.store.mutate(&[OFFICES], |data| {
            let office = Office {
                id: next_id(data.offices.iter().map(|o| o.id)),
                name: request.name,
                location: request.location,
                capacity: request.capacity,
                equipment: request.equipment,
                status: EntityStatus::Active,
                created_at: Utc::now(),
            };
            data.offices.push(office.clone());
            info!("Created office {} ({})", office.id, office.name);
            Ok(office)
        })
    }

    pub fn update(&self, id: i64, update: OfficeUpdate) -> Result<Office, AppError> {
        self.store.mutate(&[OFFICES], |data| {
            let office = data
                .offices
                .iter_mut()
                .find(|o| o.id == id)
                .ok_or_else(|| AppError::NotFound(format!("office {id} not found")))?;

            if let Some(name) = update.name {
                office.name = name;
            }
            if let Some(location) = update.location {
                office.location = location;
            }
            if let Some(capacity) = update.capacity {
                office.capacity = capacity;
            }
            if let Some(equipment) = update.equipment {
                office.equipment = equipment;
            }
            if let Some(status) = update.status {
                office.status = status;
            }

            Ok(office.clone())
        })
    }

    /// An office cannot be deleted while an active professional still has its
    /// name on their schedule.
    pub fn remove(&self, id: i64) -> Result<(), AppError> {
        self.store.mutate(&[OFFICES], |data| {
            let office = data
                .offices
                .iter()
                .find(|o| o.id == id)
                .ok_or_else(|| AppError::NotFound(format!("office {id} not found")))?;

            if office_in_use(data, &office.name) {
                warn!("Refusing to delete office {}: in use", office.name);
                return Err(AppError::Conflict(format!(
                    "office {} is assigned to active professionals",
                    office.name
                )));
            }

            data.offices.retain(|o| o.id != id);
            Ok(())
        })
    }

    pub fn get(&self, id: i64) -> Result<Option<Office>, AppError> {
        let data = self.store.read()?;
        Ok(data.offices.iter().find(|o| o.id == id).cloned())
    }

    pub fn list(&self) -> Result<Vec<Office>, AppError> {
        let data = self.store.read()?;
        Ok(data.offices.clone())
    }
}

/// Professionals reference offices by name rather than by id, so the delete
/// guard is a best-effort name join.
pub fn office_in_use(data: &ClinicData, name: &str) -> bool {
    data.professionals
        .iter()
        .any(|p| p.office == name && p.status == EntityStatus::Active)
}
