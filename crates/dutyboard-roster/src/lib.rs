//! Dutyboard — duty roster.
//!
//! Responsible for turning the static duty catalog document into an ordered
//! slug → `Duty` lookup, and for the read-only views a renderer consumes.

pub mod application;
pub mod domain;
