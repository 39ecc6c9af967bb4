//! pulsepoint-core
//!
//! Pure domain types shared across the Pulsepoint system: risk and severity
//! vocabulary, client and assessment records. No scoring logic and no I/O —
//! this is the shared vocabulary of the workspace.

pub mod error;
pub mod models;
pub mod risk;
