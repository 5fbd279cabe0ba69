use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use shared_models::appointment::{Appointment, AppointmentStatus};
use shared_models::error::AppError;
use shared_store::{ClinicData, ClinicStore};

use crate::models::{
    BoardEntry, BoardSummary, OfficeBoardStatus, OfficeOccupant, WaitStatus, WaitingRoomBoard,
};

const UNKNOWN: &str = "unknown";

pub struct WaitingRoomService {
    store: Arc<ClinicStore>,
}

impl WaitingRoomService {
    pub fn new(store: Arc<ClinicStore>) -> Self {
        Self { store }
    }

    pub fn board(&self, date: NaiveDate, now: NaiveDateTime) -> Result<WaitingRoomBoard, AppError> {
        let data = self.store.read()?;
        Ok(build_board(&data, date, now))
    }
}

/// Pure projection over the ledger and catalogs for one date. Recomputed on
/// demand; mutates nothing.
pub fn build_board(data: &ClinicData, date: NaiveDate, now: NaiveDateTime) -> WaitingRoomBoard {
    let mut day: Vec<&Appointment> = data.appointments.iter().filter(|a| a.date == date).collect();
    day.sort_by_key(|a| a.time);

    debug!("Building waiting-room board for {}: {} appointments", date, day.len());

    let count = |status: AppointmentStatus| day.iter().filter(|a| a.status == status).count();
    let summary = BoardSummary {
        total: day.len(),
        pending: count(AppointmentStatus::Confirmed),
        waiting: count(AppointmentStatus::Waiting),
        in_consultation: count(AppointmentStatus::InConsultation),
        attended: count(AppointmentStatus::Attended),
    };

    let entries = day
        .iter()
        .map(|appointment| {
            // Dangling references resolve to a placeholder, never an error.
            let patient = data
                .patients
                .iter()
                .find(|p| p.id == appointment.patient_id)
                .map(|p| p.full_name())
                .unwrap_or_else(|| UNKNOWN.to_string());
            let professional = data
                .professionals
                .iter()
                .find(|p| p.id == appointment.professional_id);
            let specialty = data
                .specialties
                .iter()
                .find(|s| s.id == appointment.specialty_id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| UNKNOWN.to_string());

            let elapsed = (now - date.and_time(appointment.time)).num_minutes();

            BoardEntry {
                appointment_id: appointment.id,
                time: appointment.time,
                patient,
                professional: professional
                    .map(|p| p.full_name.clone())
                    .unwrap_or_else(|| UNKNOWN.to_string()),
                specialty,
                office: professional
                    .map(|p| p.office.clone())
                    .unwrap_or_else(|| UNKNOWN.to_string()),
                status: appointment.status,
                wait: WaitStatus::from_elapsed(elapsed),
            }
        })
        .collect();

    let offices = office_statuses(data, &day);

    WaitingRoomBoard {
        date,
        summary,
        entries,
        offices,
    }
}

/// Occupancy per office name. An office is occupied while a day appointment
/// in consultation belongs to one of its professionals (name join).
fn office_statuses(data: &ClinicData, day: &[&Appointment]) -> Vec<OfficeBoardStatus> {
    let mut names: Vec<&str> = Vec::new();
    for professional in &data.professionals {
        if !professional.office.is_empty() && !names.contains(&professional.office.as_str()) {
            names.push(&professional.office);
        }
    }

    names
        .into_iter()
        .map(|name| {
            let professionals: Vec<String> = data
                .professionals
                .iter()
                .filter(|p| p.office == name)
                .map(|p| p.full_name.clone())
                .collect();

            let current = day.iter().find(|appointment| {
                appointment.status == AppointmentStatus::InConsultation
                    && data
                        .professionals
                        .iter()
                        .any(|p| p.id == appointment.professional_id && p.office == name)
            });

            let occupant = current.map(|appointment| OfficeOccupant {
                patient: data
                    .patients
                    .iter()
                    .find(|p| p.id == appointment.patient_id)
                    .map(|p| p.full_name())
                    .unwrap_or_else(|| UNKNOWN.to_string()),
                since: appointment.time,
            });

            OfficeBoardStatus {
                name: name.to_string(),
                professionals,
                occupied: occupant.is_some(),
                current: occupant,
            }
        })
        .collect()
}
