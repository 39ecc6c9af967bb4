//! pulsepoint-report
//!
//! Printable report generation from scored assessments.

pub mod error;
pub mod print;
pub mod render;
