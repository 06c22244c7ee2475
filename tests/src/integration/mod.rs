//! Cross-crate integration scenarios.

pub mod directory_flows;
pub mod failure_modes;
