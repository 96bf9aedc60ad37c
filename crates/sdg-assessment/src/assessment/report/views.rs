use super::super::domain::{Category, PerformanceLevel, SdgId};
use super::super::recommendations::PhaseRecommendations;
use serde::Serialize;

/// One row of the per-SDG results table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SdgScoreView {
    pub sdg_id: SdgId,
    pub name: &'static str,
    pub direct_score: f64,
    pub bonus_points: f64,
    pub final_score: f64,
    pub performance: PerformanceLevel,
    pub performance_color: &'static str,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScoreView {
    pub final_score: f64,
    pub performance: PerformanceLevel,
    pub performance_color: &'static str,
}

/// Building-centric rollups over selected goals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArchitectureMetrics {
    pub energy_performance: f64,
    pub water_efficiency: f64,
    pub material_sustainability: f64,
}

/// Guidance attached to a weak goal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FocusRecommendation {
    pub sdg_id: SdgId,
    pub name: &'static str,
    pub final_score: f64,
    pub recommendations: PhaseRecommendations,
}
