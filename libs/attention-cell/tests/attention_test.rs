use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::{NaiveDate, NaiveTime};

use attention_cell::models::{MedicalAttentionUpdate, NewMedicalAttention};
use attention_cell::services::attentions::AttentionService;
use shared_models::catalog::{
    EntityStatus, Patient, Professional, Specialty, WorkDay, WorkHours,
};
use shared_models::error::AppError;
use shared_store::{ClinicStore, MemoryBackend, PATIENTS, PROFESSIONALS, SPECIALTIES};

fn t(raw: &str) -> NaiveTime {
    NaiveTime::parse_from_str(raw, "%H:%M").unwrap()
}

fn d(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

/// A store seeded with one patient, one professional and one specialty, all id 1.
fn seeded_store() -> Arc<ClinicStore> {
    let store = Arc::new(ClinicStore::open(Arc::new(MemoryBackend::new())).unwrap());
    store
        .mutate(
            &[PATIENTS, PROFESSIONALS, SPECIALTIES],
            |data| -> Result<(), AppError> {
                data.patients.push(Patient {
                    id: 1,
                    dni: "12345678".to_string(),
                    first_name: "María".to_string(),
                    last_name: "González".to_string(),
                    birth_date: NaiveDate::from_ymd_opt(1985, 3, 15).unwrap(),
                    insurance: "OSDE".to_string(),
                    phone: "11-2345-6789".to_string(),
                    address: "Av. Corrientes 1234".to_string(),
                    email: "maria.gonzalez@example.com".to_string(),
                    status: EntityStatus::Active,
                });
                data.professionals.push(Professional {
                    id: 1,
                    full_name: "Dr. Juan Carlos Pérez".to_string(),
                    license: "MN12345".to_string(),
                    specialty_id: 1,
                    work_days: vec![WorkDay::Monday],
                    work_hours: WorkHours {
                        start: t("08:00"),
                        end: t("16:00"),
                    },
                    office: "Room 1".to_string(),
                    status: EntityStatus::Active,
                });
                data.specialties.push(Specialty {
                    id: 1,
                    name: "Cardiología".to_string(),
                    duration_minutes: 30,
                    allow_overbooking: false,
                    description: String::new(),
                });
                Ok(())
            },
        )
        .unwrap();
    store
}

fn new_attention(date: &str) -> NewMedicalAttention {
    NewMedicalAttention {
        appointment_id: None,
        patient_id: 1,
        professional_id: 1,
        specialty_id: 1,
        date: d(date),
        diagnosis: "Dermatitis atópica leve".to_string(),
        treatment: "Crema hidratante diaria".to_string(),
        observations: String::new(),
        attachments: vec![],
    }
}

#[test]
fn recording_assigns_sequential_ids() {
    let service = AttentionService::new(seeded_store());

    let first = service.record(new_attention("2026-09-07")).unwrap();
    let second = service.record(new_attention("2026-09-08")).unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert!(first.appointment_id.is_none());
}

#[test]
fn diagnosis_and_treatment_are_mandatory() {
    let service = AttentionService::new(seeded_store());

    let mut blank_diagnosis = new_attention("2026-09-07");
    blank_diagnosis.diagnosis = "   ".to_string();
    assert_matches!(
        service.record(blank_diagnosis),
        Err(AppError::Validation(_))
    );

    let mut blank_treatment = new_attention("2026-09-07");
    blank_treatment.treatment = String::new();
    assert_matches!(
        service.record(blank_treatment),
        Err(AppError::Validation(_))
    );

    assert!(service.list().unwrap().is_empty());
}

#[test]
fn recording_against_unknown_references_fails() {
    let service = AttentionService::new(seeded_store());

    let mut unknown_patient = new_attention("2026-09-07");
    unknown_patient.patient_id = 42;
    assert_matches!(service.record(unknown_patient), Err(AppError::NotFound(_)));

    let mut unknown_professional = new_attention("2026-09-07");
    unknown_professional.professional_id = 42;
    assert_matches!(
        service.record(unknown_professional),
        Err(AppError::NotFound(_))
    );
}

#[test]
fn patient_history_comes_back_newest_first() {
    let service = AttentionService::new(seeded_store());
    service.record(new_attention("2026-09-01")).unwrap();
    service.record(new_attention("2026-09-15")).unwrap();
    service.record(new_attention("2026-09-08")).unwrap();

    let history = service.for_patient(1).unwrap();
    let dates: Vec<NaiveDate> = history.iter().map(|a| a.date).collect();
    assert_eq!(dates, vec![d("2026-09-15"), d("2026-09-08"), d("2026-09-01")]);

    assert!(service.for_patient(42).unwrap().is_empty());
}

#[test]
fn date_listings_filter_exactly() {
    let service = AttentionService::new(seeded_store());
    service.record(new_attention("2026-09-07")).unwrap();
    service.record(new_attention("2026-09-08")).unwrap();

    let day = service.for_date(d("2026-09-07")).unwrap();
    assert_eq!(day.len(), 1);
    assert_eq!(day[0].date, d("2026-09-07"));
}

#[test]
fn updates_apply_partially_and_keep_text_mandatory() {
    let service = AttentionService::new(seeded_store());
    let attention = service.record(new_attention("2026-09-07")).unwrap();

    let updated = service
        .update(
            attention.id,
            MedicalAttentionUpdate {
                observations: Some("Control en 3 meses".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.diagnosis, attention.diagnosis);
    assert_eq!(updated.observations, "Control en 3 meses");

    let blanked = service.update(
        attention.id,
        MedicalAttentionUpdate {
            diagnosis: Some("  ".to_string()),
            ..Default::default()
        },
    );
    assert_matches!(blanked, Err(AppError::Validation(_)));
}

#[test]
fn deleting_removes_the_record() {
    let service = AttentionService::new(seeded_store());
    let attention = service.record(new_attention("2026-09-07")).unwrap();

    service.remove(attention.id).unwrap();
    assert!(service.get(attention.id).unwrap().is_none());
    assert_matches!(service.remove(attention.id), Err(AppError::NotFound(_)));
}
