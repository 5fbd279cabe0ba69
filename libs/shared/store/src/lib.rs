pub mod backend;
pub mod store;

pub use backend::{JsonFileBackend, MemoryBackend, StoreBackend};
pub use store::{next_id, ClinicData, ClinicStore, StoreError};
pub use store::{APPOINTMENTS, ATTENTIONS, OFFICES, PATIENTS, PROFESSIONALS, SPECIALTIES};
