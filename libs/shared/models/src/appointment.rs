use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==============================================================================
// APPOINTMENT MODEL
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Confirmed,
    Waiting,
    InConsultation,
    Attended,
    Cancelled,
    Absent,
}

impl AppointmentStatus {
    /// Terminal statuses end the visit; such appointments cannot be moved to
    /// a new slot anymore.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Attended | AppointmentStatus::Cancelled | AppointmentStatus::Absent
        )
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Waiting => write!(f, "waiting"),
            AppointmentStatus::InConsultation => write!(f, "in-consultation"),
            AppointmentStatus::Attended => write!(f, "attended"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::Absent => write!(f, "absent"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentKind {
    #[default]
    Regular,
    Urgent,
    Control,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub patient_id: i64,
    pub professional_id: i64,
    pub specialty_id: i64,
    pub date: NaiveDate,
    #[serde(with = "crate::timefmt")]
    pub time: NaiveTime,
    pub status: AppointmentStatus,
    #[serde(rename = "type")]
    pub kind: AppointmentKind,
    pub notes: String,
    pub created_at: DateTime<Utc>,

    // Audit fields, populated only by cancel / reschedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reschedule_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rescheduled_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_date: Option<NaiveDate>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::timefmt::option"
    )]
    pub previous_time: Option<NaiveTime>,
}
