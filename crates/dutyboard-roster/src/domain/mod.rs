//! Domain model for the duty roster.

pub mod catalog;
pub mod duty;
pub mod records;
pub mod stage;
