use std::sync::{Arc, RwLock, RwLockReadGuard};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use shared_models::appointment::Appointment;
use shared_models::attention::MedicalAttention;
use shared_models::catalog::{Office, Patient, Professional, Specialty};
use shared_models::error::AppError;

use crate::backend::StoreBackend;

pub const PATIENTS: &str = "patients";
pub const SPECIALTIES: &str = "specialties";
pub const PROFESSIONALS: &str = "professionals";
pub const OFFICES: &str = "offices";
pub const APPOINTMENTS: &str = "appointments";
pub const ATTENTIONS: &str = "attentions";

/// The six entity collections, owned by the single in-process store.
#[derive(Debug, Default, Clone)]
pub struct ClinicData {
    pub patients: Vec<Patient>,
    pub specialties: Vec<Specialty>,
    pub professionals: Vec<Professional>,
    pub offices: Vec<Office>,
    pub appointments: Vec<Appointment>,
    pub attentions: Vec<MedicalAttention>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("clinic store lock poisoned")]
    LockPoisoned,

    #[error("persisting collection {collection}: {source}")]
    Persist {
        collection: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::LockPoisoned => AppError::Internal(err.to_string()),
            StoreError::Persist { .. } => AppError::Storage(err.to_string()),
        }
    }
}

pub struct ClinicStore {
    inner: RwLock<ClinicData>,
    backend: Arc<dyn StoreBackend>,
}

impl ClinicStore {
    /// Loads all six collections from the backend. Absent collections start
    /// out empty.
    pub fn open(backend: Arc<dyn StoreBackend>) -> Result<Self> {
        let data = ClinicData {
            patients: load_collection(backend.as_ref(), PATIENTS)?,
            specialties: load_collection(backend.as_ref(), SPECIALTIES)?,
            professionals: load_collection(backend.as_ref(), PROFESSIONALS)?,
            offices: load_collection(backend.as_ref(), OFFICES)?,
            appointments: load_collection(backend.as_ref(), APPOINTMENTS)?,
            attentions: load_collection(backend.as_ref(), ATTENTIONS)?,
        };

        info!(
            "Clinic store loaded: {} patients, {} professionals, {} appointments",
            data.patients.len(),
            data.professionals.len(),
            data.appointments.len()
        );

        Ok(Self {
            inner: RwLock::new(data),
            backend,
        })
    }

    /// Read access for pure queries.
    pub fn read(&self) -> Result<RwLockReadGuard<'_, ClinicData>, StoreError> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    /// Runs `f` under the write lock and persists the touched collections when
    /// it succeeds. The write lock is the serialization point for every
    /// check-then-act sequence: a booking that checks availability and appends
    /// inside one closure cannot race another booking for the same slot.
    pub fn mutate<T, E>(
        &self,
        collections: &[&str],
        f: impl FnOnce(&mut ClinicData) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<StoreError>,
    {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| E::from(StoreError::LockPoisoned))?;
        let out = f(&mut guard)?;
        for collection in collections {
            self.persist(&guard, collection).map_err(|source| {
                E::from(StoreError::Persist {
                    collection: collection.to_string(),
                    source,
                })
            })?;
        }
        Ok(out)
    }

    fn persist(&self, data: &ClinicData, collection: &str) -> Result<()> {
        let value = match collection {
            PATIENTS => serde_json::to_value(&data.patients)?,
            SPECIALTIES => serde_json::to_value(&data.specialties)?,
            PROFESSIONALS => serde_json::to_value(&data.professionals)?,
            OFFICES => serde_json::to_value(&data.offices)?,
            APPOINTMENTS => serde_json::to_value(&data.appointments)?,
            ATTENTIONS => serde_json::to_value(&data.attentions)?,
            other => anyhow::bail!("unknown collection {other}"),
        };
        self.backend.save(collection, &value)
    }
}

/// Next auto-incrementing id: max existing + 1, or 1 for an empty collection.
pub fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0) + 1
}

fn load_collection<T: DeserializeOwned>(backend: &dyn StoreBackend, name: &str) -> Result<Vec<T>> {
    match backend.load(name)? {
        Some(value) => serde_json::from_value(value)
            .with_context(|| format!("decoding collection {name}")),
        None => Ok(Vec::new()),
    }
}
