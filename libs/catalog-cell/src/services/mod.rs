pub mod offices;
pub mod patients;
pub mod professionals;
pub mod specialties;
