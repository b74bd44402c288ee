pub mod employee;
pub mod reports;
pub mod tool;
pub mod usage_event;
