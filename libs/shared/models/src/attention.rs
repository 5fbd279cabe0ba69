use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Clinical record written by a professional after seeing a patient.
/// Optionally tied to the appointment that produced it; walk-in attentions
/// have no appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalAttention {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_id: Option<i64>,
    pub patient_id: i64,
    pub professional_id: i64,
    pub specialty_id: i64,
    pub date: NaiveDate,
    pub diagnosis: String,
    pub treatment: String,
    #[serde(default)]
    pub observations: String,
    #[serde(default)]
    pub attachments: Vec<String>,
    pub created_at: DateTime<Utc>,
}
