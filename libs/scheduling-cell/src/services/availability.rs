use chrono::{NaiveDate, NaiveTime};

use shared_models::appointment::{Appointment, AppointmentStatus};

/// Single enforcement point for the no-double-booking invariant: a slot is
/// free unless some non-cancelled appointment for the same professional sits
/// on the exact same date and time.
///
/// `exclude_appointment_id` is set to the appointment's own id when mutating
/// an existing appointment, so it does not conflict with itself. Linear scan;
/// a clinic's day holds tens of appointments at most.
pub fn is_available(
    appointments: &[Appointment],
    professional_id: i64,
    date: NaiveDate,
    time: NaiveTime,
    exclude_appointment_id: Option<i64>,
) -> bool {
    !appointments.iter().any(|appointment| {
        appointment.professional_id == professional_id
            && appointment.date == date
            && appointment.time == time
            && exclude_appointment_id != Some(appointment.id)
            && appointment.status != AppointmentStatus::Cancelled
    })
}
