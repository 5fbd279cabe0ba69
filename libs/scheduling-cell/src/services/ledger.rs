use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime, Utc};
use tracing::{debug, info, warn};

use shared_models::appointment::{Appointment, AppointmentStatus};
use shared_store::{next_id, ClinicData, ClinicStore, APPOINTMENTS};

use crate::models::{BookAppointmentRequest, SchedulingError, Slot};
use crate::services::availability::is_available;
use crate::services::slots::generate_slots;

/// The authoritative appointment collection and its lifecycle operations.
/// Every mutation runs inside one `ClinicStore::mutate` closure, so the
/// availability check and the write it guards cannot be interleaved with
/// another booking.
pub struct AppointmentLedger {
    store: Arc<ClinicStore>,
}

impl AppointmentLedger {
    pub fn new(store: Arc<ClinicStore>) -> Self {
        Self { store }
    }

    // ==========================================================================
    // LIFECYCLE OPERATIONS
    // ==========================================================================

    /// Books a slot: validates the references, re-checks availability and
    /// appends, all under the store's write lock.
    pub fn book(&self, request: BookAppointmentRequest) -> Result<Appointment, SchedulingError> {
        debug!(
            "Booking professional {} on {} at {}",
            request.professional_id, request.date, request.time
        );

        self.store.mutate(&[APPOINTMENTS], |data| {
            if !data.patients.iter().any(|p| p.id == request.patient_id) {
                return Err(SchedulingError::PatientNotFound);
            }
            if !data
                .professionals
                .iter()
                .any(|p| p.id == request.professional_id)
            {
                return Err(SchedulingError::ProfessionalNotFound);
            }
            if !data.specialties.iter().any(|s| s.id == request.specialty_id) {
                return Err(SchedulingError::SpecialtyNotFound);
            }

            if !is_available(
                &data.appointments,
                request.professional_id,
                request.date,
                request.time,
                None,
            ) {
                warn!(
                    "Slot {} {} already taken for professional {}",
                    request.date, request.time, request.professional_id
                );
                return Err(SchedulingError::SlotUnavailable);
            }

            let appointment = Self::append(data, request);
            info!(
                "Booked appointment {} for professional {} on {} at {}",
                appointment.id, appointment.professional_id, appointment.date, appointment.time
            );
            Ok(appointment)
        })
    }

    /// Raw append: callers hold the write lock and have already confirmed the
    /// slot is free.
    fn append(data: &mut ClinicData, request: BookAppointmentRequest) -> Appointment {
        let appointment = Appointment {
            id: next_id(data.appointments.iter().map(|a| a.id)),
            patient_id: request.patient_id,
            professional_id: request.professional_id,
            specialty_id: request.specialty_id,
            date: request.date,
            time: request.time,
            status: AppointmentStatus::Confirmed,
            kind: request.kind,
            notes: request.notes,
            created_at: Utc::now(),
            cancel_reason: None,
            cancelled_at: None,
            reschedule_reason: None,
            rescheduled_at: None,
            previous_date: None,
            previous_time: None,
        };
        data.appointments.push(appointment.clone());
        appointment
    }

    /// In-place status overwrite. Any status may be set from any other; the
    /// front desk corrects mistakes by overwriting.
    pub fn update_status(
        &self,
        id: i64,
        status: AppointmentStatus,
    ) -> Result<Appointment, SchedulingError> {
        self.store.mutate(&[APPOINTMENTS], |data| {
            let appointment = data
                .appointments
                .iter_mut()
                .find(|a| a.id == id)
                .ok_or(SchedulingError::AppointmentNotFound)?;
            debug!(
                "Appointment {} status {} -> {}",
                id, appointment.status, status
            );
            appointment.status = status;
            Ok(appointment.clone())
        })
    }

    /// Cancelling requires a reason. Re-cancelling just overwrites the reason
    /// and timestamp.
    pub fn cancel(&self, id: i64, reason: &str) -> Result<Appointment, SchedulingError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(SchedulingError::Validation(
                "a cancellation reason is required".to_string(),
            ));
        }

        self.store.mutate(&[APPOINTMENTS], |data| {
            let appointment = data
                .appointments
                .iter_mut()
                .find(|a| a.id == id)
                .ok_or(SchedulingError::AppointmentNotFound)?;

            appointment.status = AppointmentStatus::Cancelled;
            appointment.cancel_reason = Some(reason.to_string());
            appointment.cancelled_at = Some(Utc::now());
            info!("Cancelled appointment {}: {}", id, reason);
            Ok(appointment.clone())
        })
    }

    /// Moves an appointment to a new slot. Fails without mutating anything
    /// when the reason is blank, the appointment is already terminal, or the
    /// target slot is taken. Status is left unchanged on success.
    pub fn reschedule(
        &self,
        id: i64,
        new_date: NaiveDate,
        new_time: NaiveTime,
        reason: &str,
    ) -> Result<Appointment, SchedulingError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(SchedulingError::Validation(
                "a reschedule reason is required".to_string(),
            ));
        }

        self.store.mutate(&[APPOINTMENTS], |data| {
            let index = data
                .appointments
                .iter()
                .position(|a| a.id == id)
                .ok_or(SchedulingError::AppointmentNotFound)?;

            let status = data.appointments[index].status;
            if status.is_terminal() {
                return Err(SchedulingError::Validation(format!(
                    "appointment {id} is {status} and can no longer be rescheduled"
                )));
            }

            let professional_id = data.appointments[index].professional_id;
            if !is_available(
                &data.appointments,
                professional_id,
                new_date,
                new_time,
                Some(id),
            ) {
                warn!(
                    "Reschedule of appointment {} to {} {} refused: slot taken",
                    id, new_date, new_time
                );
                return Err(SchedulingError::SlotUnavailable);
            }

            let appointment = &mut data.appointments[index];
            appointment.previous_date = Some(appointment.date);
            appointment.previous_time = Some(appointment.time);
            appointment.date = new_date;
            appointment.time = new_time;
            appointment.reschedule_reason = Some(reason.to_string());
            appointment.rescheduled_at = Some(Utc::now());
            info!(
                "Rescheduled appointment {} to {} at {}",
                id, new_date, new_time
            );
            Ok(appointment.clone())
        })
    }

    /// Administrative removal, bypassing the audit trail. Prefer `cancel` for
    /// anything with real-world meaning.
    pub fn delete(&self, id: i64) -> Result<(), SchedulingError> {
        self.store.mutate(&[APPOINTMENTS], |data| {
            let before = data.appointments.len();
            data.appointments.retain(|a| a.id != id);
            if data.appointments.len() == before {
                return Err(SchedulingError::AppointmentNotFound);
            }
            info!("Deleted appointment {}", id);
            Ok(())
        })
    }

    // ==========================================================================
    // QUERIES
    // ==========================================================================

    pub fn get(&self, id: i64) -> Result<Option<Appointment>, SchedulingError> {
        let data = self.store.read()?;
        Ok(data.appointments.iter().find(|a| a.id == id).cloned())
    }

    pub fn for_date(&self, date: NaiveDate) -> Result<Vec<Appointment>, SchedulingError> {
        let data = self.store.read()?;
        let mut appointments: Vec<Appointment> = data
            .appointments
            .iter()
            .filter(|a| a.date == date)
            .cloned()
            .collect();
        appointments.sort_by_key(|a| a.time);
        Ok(appointments)
    }

    pub fn for_professional(
        &self,
        professional_id: i64,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Appointment>, SchedulingError> {
        let data = self.store.read()?;
        let mut appointments: Vec<Appointment> = data
            .appointments
            .iter()
            .filter(|a| {
                a.professional_id == professional_id && date.map_or(true, |d| a.date == d)
            })
            .cloned()
            .collect();
        appointments.sort_by_key(|a| (a.date, a.time));
        Ok(appointments)
    }

    /// Bookable start times for a professional on a date, each flagged against
    /// the current ledger.
    pub fn slots_for(
        &self,
        professional_id: i64,
        date: NaiveDate,
        exclude_appointment_id: Option<i64>,
    ) -> Result<Vec<Slot>, SchedulingError> {
        let data = self.store.read()?;
        let professional = data
            .professionals
            .iter()
            .find(|p| p.id == professional_id)
            .ok_or(SchedulingError::ProfessionalNotFound)?;
        let specialty = data
            .specialties
            .iter()
            .find(|s| s.id == professional.specialty_id);
        generate_slots(
            professional,
            specialty,
            date,
            &data.appointments,
            exclude_appointment_id,
        )
    }

    pub fn check_availability(
        &self,
        professional_id: i64,
        date: NaiveDate,
        time: NaiveTime,
        exclude_appointment_id: Option<i64>,
    ) -> Result<bool, SchedulingError> {
        let data = self.store.read()?;
        Ok(is_available(
            &data.appointments,
            professional_id,
            date,
            time,
            exclude_appointment_id,
        ))
    }
}
