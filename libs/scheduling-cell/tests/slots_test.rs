use assert_matches::assert_matches;
use chrono::{NaiveDate, NaiveTime, Utc};

use scheduling_cell::models::SchedulingError;
use scheduling_cell::services::availability::is_available;
use scheduling_cell::services::slots::generate_slots;
use shared_models::appointment::{Appointment, AppointmentKind, AppointmentStatus};
use shared_models::catalog::{EntityStatus, Professional, Specialty, WorkDay, WorkHours};

fn t(raw: &str) -> NaiveTime {
    NaiveTime::parse_from_str(raw, "%H:%M").unwrap()
}

fn d(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

fn professional(start: &str, end: &str) -> Professional {
    Professional {
        id: 1,
        full_name: "Dr. Juan Carlos Pérez".to_string(),
        license: "MN12345".to_string(),
        specialty_id: 1,
        work_days: vec![WorkDay::Monday],
        work_hours: WorkHours {
            start: t(start),
            end: t(end),
        },
        office: "Room 1".to_string(),
        status: EntityStatus::Active,
    }
}

fn specialty(duration_minutes: i64) -> Specialty {
    Specialty {
        id: 1,
        name: "Cardiología".to_string(),
        duration_minutes,
        allow_overbooking: false,
        description: String::new(),
    }
}

fn appointment(id: i64, date: &str, time: &str, status: AppointmentStatus) -> Appointment {
    Appointment {
        id,
        patient_id: 1,
        professional_id: 1,
        specialty_id: 1,
        date: d(date),
        time: t(time),
        status,
        kind: AppointmentKind::Regular,
        notes: String::new(),
        created_at: Utc::now(),
        cancel_reason: None,
        cancelled_at: None,
        reschedule_reason: None,
        rescheduled_at: None,
        previous_date: None,
        previous_time: None,
    }
}

#[test]
fn slots_walk_the_working_hours_at_the_specialty_pace() {
    let slots = generate_slots(
        &professional("08:00", "10:00"),
        Some(&specialty(30)),
        d("2026-09-07"),
        &[],
        None,
    )
    .unwrap();

    let times: Vec<NaiveTime> = slots.iter().map(|s| s.time).collect();
    assert_eq!(times, vec![t("08:00"), t("08:30"), t("09:00"), t("09:30")]);
    assert!(slots.iter().all(|s| s.available));
}

#[test]
fn last_slot_may_start_before_the_end_and_run_past_it() {
    let slots = generate_slots(
        &professional("09:00", "10:00"),
        Some(&specialty(45)),
        d("2026-09-07"),
        &[],
        None,
    )
    .unwrap();

    let times: Vec<NaiveTime> = slots.iter().map(|s| s.time).collect();
    assert_eq!(times, vec![t("09:00"), t("09:45")]);
}

#[test]
fn inverted_working_hours_produce_no_slots() {
    let slots = generate_slots(
        &professional("16:00", "08:00"),
        Some(&specialty(30)),
        d("2026-09-07"),
        &[],
        None,
    )
    .unwrap();
    assert!(slots.is_empty());
}

#[test]
fn missing_specialty_falls_back_to_thirty_minutes() {
    let slots = generate_slots(
        &professional("08:00", "09:00"),
        None,
        d("2026-09-07"),
        &[],
        None,
    )
    .unwrap();
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[1].time, t("08:30"));
}

#[test]
fn non_positive_duration_is_rejected() {
    let result = generate_slots(
        &professional("08:00", "10:00"),
        Some(&specialty(0)),
        d("2026-09-07"),
        &[],
        None,
    );
    assert_matches!(result, Err(SchedulingError::Validation(_)));
}

#[test]
fn booked_slots_are_flagged_taken() {
    let appointments = vec![appointment(
        1,
        "2026-09-07",
        "08:30",
        AppointmentStatus::Confirmed,
    )];
    let slots = generate_slots(
        &professional("08:00", "09:30"),
        Some(&specialty(30)),
        d("2026-09-07"),
        &appointments,
        None,
    )
    .unwrap();

    assert!(slots[0].available);
    assert!(!slots[1].available);
    assert!(slots[2].available);
}

#[test]
fn cancelled_appointments_free_their_slot() {
    let appointments = vec![appointment(
        1,
        "2026-09-07",
        "08:30",
        AppointmentStatus::Cancelled,
    )];
    assert!(is_available(&appointments, 1, d("2026-09-07"), t("08:30"), None));
}

#[test]
fn excluded_appointment_does_not_block_its_own_slot() {
    let appointments = vec![appointment(
        7,
        "2026-09-07",
        "08:30",
        AppointmentStatus::Confirmed,
    )];

    assert!(!is_available(&appointments, 1, d("2026-09-07"), t("08:30"), None));
    assert!(is_available(&appointments, 1, d("2026-09-07"), t("08:30"), Some(7)));
    assert!(!is_available(&appointments, 1, d("2026-09-07"), t("08:30"), Some(99)));
}

#[test]
fn availability_only_considers_the_same_professional_and_date() {
    let appointments = vec![appointment(
        1,
        "2026-09-07",
        "08:30",
        AppointmentStatus::Confirmed,
    )];

    assert!(is_available(&appointments, 2, d("2026-09-07"), t("08:30"), None));
    assert!(is_available(&appointments, 1, d("2026-09-08"), t("08:30"), None));
    assert!(is_available(&appointments, 1, d("2026-09-07"), t("09:00"), None));
}
