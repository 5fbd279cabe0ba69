use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use shared_models::appointment::AppointmentStatus;

// ==============================================================================
// STATUS BOARD MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct WaitingRoomBoard {
    pub date: NaiveDate,
    pub summary: BoardSummary,
    pub entries: Vec<BoardEntry>,
    pub offices: Vec<OfficeBoardStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardSummary {
    pub total: usize,
    /// Confirmed appointments that have not checked in yet.
    pub pending: usize,
    pub waiting: usize,
    pub in_consultation: usize,
    pub attended: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardEntry {
    pub appointment_id: i64,
    #[serde(with = "shared_models::timefmt")]
    pub time: NaiveTime,
    pub patient: String,
    pub professional: String,
    pub specialty: String,
    pub office: String,
    pub status: AppointmentStatus,
    pub wait: WaitStatus,
}

/// Elapsed wait relative to the scheduled time. Negative elapse is reported
/// as pending, exactly zero as now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "minutes", rename_all = "snake_case")]
pub enum WaitStatus {
    Pending,
    Now,
    Elapsed(i64),
}

impl WaitStatus {
    pub fn from_elapsed(minutes: i64) -> Self {
        if minutes < 0 {
            WaitStatus::Pending
        } else if minutes == 0 {
            WaitStatus::Now
        } else {
            WaitStatus::Elapsed(minutes)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OfficeBoardStatus {
    pub name: String,
    pub professionals: Vec<String>,
    pub occupied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<OfficeOccupant>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OfficeOccupant {
    pub patient: String,
    #[serde(with = "shared_models::timefmt")]
    pub since: NaiveTime,
}
