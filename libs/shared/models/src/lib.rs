pub mod appointment;
pub mod attention;
pub mod catalog;
pub mod error;
pub mod timefmt;
