use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::{NaiveDate, NaiveTime};

use catalog_cell::models::{
    NewOffice, NewPatient, NewProfessional, NewSpecialty, OfficeUpdate, PatientUpdate,
    ProfessionalUpdate, SpecialtyUpdate,
};
use catalog_cell::services::offices::OfficeService;
use catalog_cell::services::patients::PatientService;
use catalog_cell::services::professionals::ProfessionalService;
use catalog_cell::services::specialties::SpecialtyService;
use shared_models::catalog::{EntityStatus, WorkDay, WorkHours};
use shared_models::error::AppError;
use shared_store::{ClinicStore, MemoryBackend};

fn store() -> Arc<ClinicStore> {
    Arc::new(ClinicStore::open(Arc::new(MemoryBackend::new())).unwrap())
}

fn t(raw: &str) -> NaiveTime {
    NaiveTime::parse_from_str(raw, "%H:%M").unwrap()
}

fn new_patient(dni: &str) -> NewPatient {
    NewPatient {
        dni: dni.to_string(),
        first_name: "María".to_string(),
        last_name: "González".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1985, 3, 15).unwrap(),
        insurance: "OSDE".to_string(),
        phone: "11-2345-6789".to_string(),
        address: "Av. Corrientes 1234".to_string(),
        email: "maria.gonzalez@example.com".to_string(),
    }
}

fn new_professional(office: &str) -> NewProfessional {
    NewProfessional {
        full_name: "Dr. Juan Carlos Pérez".to_string(),
        license: "MN12345".to_string(),
        specialty_id: 1,
        work_days: vec![WorkDay::Monday, WorkDay::Friday],
        work_hours: WorkHours {
            start: t("08:00"),
            end: t("16:00"),
        },
        office: office.to_string(),
    }
}

#[test]
fn patient_ids_increment_and_start_active() {
    let service = PatientService::new(store());

    let first = service.register(new_patient("12345678")).unwrap();
    let second = service.register(new_patient("87654321")).unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.status, EntityStatus::Active);
}

#[test]
fn updating_a_missing_patient_is_not_found() {
    let service = PatientService::new(store());
    let result = service.update(42, PatientUpdate::default());
    assert_matches!(result, Err(AppError::NotFound(_)));
}

#[test]
fn removed_patients_stay_referenced_nowhere() {
    let service = PatientService::new(store());
    let patient = service.register(new_patient("12345678")).unwrap();

    service.remove(patient.id).unwrap();
    assert!(service.get(patient.id).unwrap().is_none());
    assert_matches!(service.remove(patient.id), Err(AppError::NotFound(_)));
}

#[test]
fn specialty_duration_must_be_positive() {
    let service = SpecialtyService::new(store());

    let zero = service.create(NewSpecialty {
        name: "Cardiología".to_string(),
        duration_minutes: 0,
        allow_overbooking: false,
        description: String::new(),
    });
    assert_matches!(zero, Err(AppError::Validation(_)));

    let created = service
        .create(NewSpecialty {
            name: "Cardiología".to_string(),
            duration_minutes: 30,
            allow_overbooking: true,
            description: String::new(),
        })
        .unwrap();

    let bad_update = service.update(
        created.id,
        SpecialtyUpdate {
            duration_minutes: Some(-5),
            ..Default::default()
        },
    );
    assert_matches!(bad_update, Err(AppError::Validation(_)));
}

#[test]
fn professionals_by_specialty_excludes_inactive() {
    let store = store();
    let service = ProfessionalService::new(store.clone());

    let active = service.register(new_professional("Room 1")).unwrap();
    let retired = service.register(new_professional("Room 2")).unwrap();
    service
        .update(
            retired.id,
            ProfessionalUpdate {
                status: Some(EntityStatus::Inactive),
                ..Default::default()
            },
        )
        .unwrap();

    let bookable = service.list_by_specialty(1).unwrap();
    assert_eq!(bookable.len(), 1);
    assert_eq!(bookable[0].id, active.id);
}

#[test]
fn office_delete_is_refused_while_active_professionals_use_it() {
    let store = store();
    let offices = OfficeService::new(store.clone());
    let professionals = ProfessionalService::new(store);

    let office = offices
        .create(NewOffice {
            name: "Room 1".to_string(),
            location: "Ground floor".to_string(),
            capacity: 1,
            equipment: vec!["stretcher".to_string()],
        })
        .unwrap();
    let professional = professionals.register(new_professional("Room 1")).unwrap();

    assert_matches!(offices.remove(office.id), Err(AppError::Conflict(_)));

    professionals
        .update(
            professional.id,
            ProfessionalUpdate {
                status: Some(EntityStatus::Inactive),
                ..Default::default()
            },
        )
        .unwrap();

    offices.remove(office.id).unwrap();
    assert!(offices.get(office.id).unwrap().is_none());
}

#[test]
fn office_updates_apply_partially() {
    let service = OfficeService::new(store());
    let office = service
        .create(NewOffice {
            name: "Room 1".to_string(),
            location: "Ground floor".to_string(),
            capacity: 1,
            equipment: vec![],
        })
        .unwrap();

    let updated = service
        .update(
            office.id,
            OfficeUpdate {
                location: Some("First floor".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.name, "Room 1");
    assert_eq!(updated.location, "First floor");
}
