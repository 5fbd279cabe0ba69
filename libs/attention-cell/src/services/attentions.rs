use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

use shared_models::attention::MedicalAttention;
use shared_models::error::AppError;
use shared_store::{next_id, ClinicStore, ATTENTIONS};

use crate::models::{MedicalAttentionUpdate, NewMedicalAttention};

/// Clinical records written after consultations. Unlike appointments these
/// have no lifecycle; they are plain records with patient and professional
/// history views.
pub struct AttentionService {
    store: Arc<ClinicStore>,
}

impl AttentionService {
    pub fn new(store: Arc<ClinicStore>) -> Self {
        Self { store }
    }

    pub fn record(&self, request: NewMedicalAttention) -> Result<MedicalAttention, AppError> {
        let diagnosis = required_text("diagnosis", &request.diagnosis)?;
        let treatment = required_text("treatment", &request.treatment)?;
        debug!(
            "Recording attention for patient {} by professional {}",
            request.patient_id, request.professional_id
        );

        self.store.mutate(&[ATTENTIONS], |data| {
            if !data.patients.iter().any(|p| p.id == request.patient_id) {
                return Err(AppError::NotFound(format!(
                    "patient {} not found",
                    request.patient_id
                )));
            }
            if !data
                .professionals
                .iter()
                .any(|p| p.id == request.professional_id)
            {
                return Err(AppError::NotFound(format!(
                    "professional {} not found",
                    request.professional_id
                )));
            }
            if !data.specialties.iter().any(|s| s.id == request.specialty_id) {
                return Err(AppError::NotFound(format!(
                    "specialty {} not found",
                    request.specialty_id
                )));
            }

            let attention = MedicalAttention {
                id: next_id(data.attentions.iter().map(|a| a.id)),
                appointment_id: request.appointment_id,
                patient_id: request.patient_id,
                professional_id: request.professional_id,
                specialty_id: request.specialty_id,
                date: request.date,
                diagnosis,
                treatment,
                observations: request.observations,
                attachments: request.attachments,
                created_at: Utc::now(),
            };
            data.attentions.push(attention.clone());
            info!(
                "Recorded attention {} for patient {}",
                attention.id, attention.patient_id
            );
            Ok(attention)
        })
    }

    pub fn update(
        &self,
        id: i64,
        update: MedicalAttentionUpdate,
    ) -> Result<MedicalAttention, AppError> {
        let diagnosis = update
            .diagnosis
            .as_deref()
            .map(|raw| required_text("diagnosis", raw))
            .transpose()?;
        let treatment = update
            .treatment
            .as_deref()
            .map(|raw| required_text("treatment", raw))
            .transpose()?;

        self.store.mutate(&[ATTENTIONS], |data| {
            let attention = data
                .attentions
                .iter_mut()
                .find(|a| a.id == id)
                .ok_or_else(|| AppError::NotFound(format!("attention {id} not found")))?;

            if let Some(appointment_id) = update.appointment_id {
                attention.appointment_id = Some(appointment_id);
            }
            if let Some(patient_id) = update.patient_id {
                attention.patient_id = patient_id;
            }
            if let Some(professional_id) = update.professional_id {
                attention.professional_id = professional_id;
            }
            if let Some(specialty_id) = update.specialty_id {
                attention.specialty_id = specialty_id;
            }
            if let Some(date) = update.date {
                attention.date = date;
            }
            if let Some(diagnosis) = diagnosis {
                attention.diagnosis = diagnosis;
            }
            if let Some(treatment) = treatment {
                attention.treatment = treatment;
            }
            if let Some(observations) = update.observations {
                attention.observations = observations;
            }
            if let Some(attachments) = update.attachments {
                attention.attachments = attachments;
            }

            Ok(attention.clone())
        })
    }

    pub fn remove(&self, id: i64) -> Result<(), AppError> {
        self.store.mutate(&[ATTENTIONS], |data| {
            let before = data.attentions.len();
            data.attentions.retain(|a| a.id != id);
            if data.attentions.len() == before {
                return Err(AppError::NotFound(format!("attention {id} not found")));
            }
            info!("Deleted attention {}", id);
            Ok(())
        })
    }

    pub fn get(&self, id: i64) -> Result<Option<MedicalAttention>, AppError> {
        let data = self.store.read()?;
        Ok(data.attentions.iter().find(|a| a.id == id).cloned())
    }

    pub fn list(&self) -> Result<Vec<MedicalAttention>, AppError> {
        let data = self.store.read()?;
        Ok(data.attentions.clone())
    }

    /// Patient history, newest first.
    pub fn for_patient(&self, patient_id: i64) -> Result<Vec<MedicalAttention>, AppError> {
        let data = self.store.read()?;
        let mut attentions: Vec<MedicalAttention> = data
            .attentions
            .iter()
            .filter(|a| a.patient_id == patient_id)
            .cloned()
            .collect();
        attentions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(attentions)
    }

    /// Professional history, newest first.
    pub fn for_professional(
        &self,
        professional_id: i64,
    ) -> Result<Vec<MedicalAttention>, AppError> {
        let data = self.store.read()?;
        let mut attentions: Vec<MedicalAttention> = data
            .attentions
            .iter()
            .filter(|a| a.professional_id == professional_id)
            .cloned()
            .collect();
        attentions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(attentions)
    }

    pub fn for_date(&self, date: NaiveDate) -> Result<Vec<MedicalAttention>, AppError> {
        let data = self.store.read()?;
        Ok(data
            .attentions
            .iter()
            .filter(|a| a.date == date)
            .cloned()
            .collect())
    }
}

fn required_text(field: &str, raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("a {field} is required")));
    }
    Ok(trimmed.to_string())
}
