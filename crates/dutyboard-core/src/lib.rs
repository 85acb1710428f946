//! Dutyboard Core — shared display primitives.
//!
//! This crate defines the stage display capability, the color resolver and
//! the duration formatter that the roster crate builds on. It contains no
//! domain entities and performs no I/O.

pub mod color;
pub mod display;
pub mod error;
pub mod time;
