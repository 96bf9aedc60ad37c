//! Sustainability scoring engine mapping a building-project questionnaire onto the
//! seventeen UN Sustainable Development Goals.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
