use chrono::{NaiveDate, NaiveTime, Timelike};
use tracing::debug;

use shared_models::appointment::Appointment;
use shared_models::catalog::{Professional, Specialty};

use crate::models::{SchedulingError, Slot};
use crate::services::availability::is_available;

/// Slot granularity used when the professional's specialty record is missing.
pub const DEFAULT_SLOT_MINUTES: i64 = 30;

/// Derives the ordered candidate start times for a professional on a date,
/// marking each one free or taken against the current appointment set.
/// Recomputed on every call, never cached.
///
/// `exclude_appointment_id` lets a reschedule flow see the appointment's own
/// slot as free.
pub fn generate_slots(
    professional: &Professional,
    specialty: Option<&Specialty>,
    date: NaiveDate,
    appointments: &[Appointment],
    exclude_appointment_id: Option<i64>,
) -> Result<Vec<Slot>, SchedulingError> {
    let duration = match specialty {
        Some(specialty) if specialty.duration_minutes <= 0 => {
            return Err(SchedulingError::Validation(format!(
                "specialty {} has a non-positive duration of {} minutes",
                specialty.name, specialty.duration_minutes
            )));
        }
        Some(specialty) => specialty.duration_minutes,
        None => DEFAULT_SLOT_MINUTES,
    };

    let start = minutes_since_midnight(professional.work_hours.start);
    let end = minutes_since_midnight(professional.work_hours.end);

    debug!(
        "Generating slots for professional {} on {}: {}..{} every {} min",
        professional.id, date, start, end, duration
    );

    let mut slots = Vec::new();
    let mut current = start;
    // The loop condition is on the slot start only; the last slot of the day
    // may run past the end of the working hours.
    while current < end {
        // `current < end <= 23:59`, so the conversion cannot fail.
        let time =
            NaiveTime::from_hms_opt((current / 60) as u32, (current % 60) as u32, 0).unwrap();
        let available = is_available(
            appointments,
            professional.id,
            date,
            time,
            exclude_appointment_id,
        );
        slots.push(Slot { time, available });
        current += duration;
    }

    Ok(slots)
}

fn minutes_since_midnight(time: NaiveTime) -> i64 {
    (time.hour() * 60 + time.minute()) as i64
}
