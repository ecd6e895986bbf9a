pub mod complaints;
pub mod dashboard;
