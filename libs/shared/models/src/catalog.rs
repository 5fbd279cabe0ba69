use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==============================================================================
// CATALOG ENTITIES
// ==============================================================================

/// Lifecycle status shared by every catalog entity. Inactive records are kept
/// around because appointments may still reference them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityStatus {
    Active,
    Inactive,
}

impl fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityStatus::Active => write!(f, "active"),
            EntityStatus::Inactive => write!(f, "inactive"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    /// National identity number. Expected unique, not enforced.
    pub dni: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub insurance: String,
    pub phone: String,
    pub address: String,
    pub email: String,
    pub status: EntityStatus,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specialty {
    pub id: i64,
    pub name: String,
    /// Canonical slot granularity for this specialty, in minutes.
    pub duration_minutes: i64,
    /// Recorded but never consulted by the booking path.
    pub allow_overbooking: bool,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkHours {
    #[serde(with = "crate::timefmt")]
    pub start: NaiveTime,
    #[serde(with = "crate::timefmt")]
    pub end: NaiveTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Professional {
    pub id: i64,
    pub full_name: String,
    pub license: String,
    pub specialty_id: i64,
    pub work_days: Vec<WorkDay>,
    pub work_hours: WorkHours,
    /// Office name, matched against `Office::name` by string equality.
    pub office: String,
    pub status: EntityStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Office {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub capacity: i64,
    pub equipment: Vec<String>,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
}
