use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::json;
use tempfile::tempdir;

use shared_models::catalog::{EntityStatus, Patient};
use shared_models::error::AppError;
use shared_store::{ClinicStore, JsonFileBackend, MemoryBackend, StoreBackend, PATIENTS};

fn patient(id: i64, first_name: &str) -> Patient {
    Patient {
        id,
        dni: "12345678".to_string(),
        first_name: first_name.to_string(),
        last_name: "González".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1985, 3, 15).unwrap(),
        insurance: "OSDE".to_string(),
        phone: "11-2345-6789".to_string(),
        address: "Av. Corrientes 1234".to_string(),
        email: "maria.gonzalez@example.com".to_string(),
        status: EntityStatus::Active,
    }
}

#[test]
fn file_backend_round_trips_a_collection() {
    let dir = tempdir().unwrap();
    let backend = JsonFileBackend::new(dir.path()).unwrap();

    assert!(backend.load("patients").unwrap().is_none());

    let value = json!([{ "id": 1, "name": "test" }]);
    backend.save("patients", &value).unwrap();

    assert_eq!(backend.load("patients").unwrap(), Some(value));
}

#[test]
fn empty_backend_opens_an_empty_store() {
    let store = ClinicStore::open(Arc::new(MemoryBackend::new())).unwrap();
    let data = store.read().unwrap();
    assert!(data.patients.is_empty());
    assert!(data.appointments.is_empty());
}

#[test]
fn mutations_persist_across_reopen() {
    let dir = tempdir().unwrap();

    {
        let backend = Arc::new(JsonFileBackend::new(dir.path()).unwrap());
        let store = ClinicStore::open(backend).unwrap();
        store
            .mutate(&[PATIENTS], |data| -> Result<(), AppError> {
                data.patients.push(patient(1, "María"));
                Ok(())
            })
            .unwrap();
    }

    let backend = Arc::new(JsonFileBackend::new(dir.path()).unwrap());
    let reopened = ClinicStore::open(backend).unwrap();
    let data = reopened.read().unwrap();
    assert_eq!(data.patients.len(), 1);
    assert_eq!(data.patients[0].first_name, "María");
}

#[test]
fn failed_mutation_writes_nothing() {
    let dir = tempdir().unwrap();
    let backend = Arc::new(JsonFileBackend::new(dir.path()).unwrap());
    let store = ClinicStore::open(backend).unwrap();

    let result = store.mutate(&[PATIENTS], |_data| -> Result<(), AppError> {
        Err(AppError::Validation("rejected".to_string()))
    });
    assert!(result.is_err());

    assert!(!dir.path().join("patients.json").exists());
}

#[test]
fn next_id_starts_at_one_and_follows_the_max() {
    assert_eq!(shared_store::next_id([].into_iter()), 1);
    assert_eq!(shared_store::next_id([1, 7, 3].into_iter()), 8);
}
