use chrono::NaiveDate;
use serde::Deserialize;

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct NewMedicalAttention {
    #[serde(default)]
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
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MedicalAttentionUpdate {
    pub appointment_id: Option<i64>,
    pub patient_id: Option<i64>,
    pub professional_id: Option<i64>,
    pub specialty_id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub diagnosis: Option<String>,
    pub treatment: Option<String>,
    pub observations: Option<String>,
    pub attachments: Option<Vec<String>>,
}
