use super::super::domain::{Category, PerformanceLevel, SdgId};
use super::super::recommendations::RecommendationLibrary;
use super::super::rules::ScoringRules;
use super::super::scoring::{round_to, ScoreBreakdown};
use super::insights::generate_insights;
use super::views::{ArchitectureMetrics, CategoryScoreView, FocusRecommendation, SdgScoreView};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

const RANKED_LIMIT: usize = 5;
const WEAKNESS_THRESHOLD: f64 = 6.0;

const ENERGY_SDGS: [u8; 2] = [7, 13];
const WATER_SDGS: [u8; 2] = [6, 14];
const MATERIAL_SDGS: [u8; 3] = [8, 12, 15];

/// Complete result bundle of one assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    pub sdg_scores: Vec<SdgScoreView>,
    pub category_scores: BTreeMap<Category, CategoryScoreView>,
    pub overall_score: f64,
    pub overall_performance: PerformanceLevel,
    pub overall_color: &'static str,
    pub strengths: Vec<SdgScoreView>,
    pub weaknesses: Vec<SdgScoreView>,
    pub performance_distribution: BTreeMap<PerformanceLevel, usize>,
    pub insights: Vec<String>,
    pub architecture_metrics: ArchitectureMetrics,
    pub focus_recommendations: Vec<FocusRecommendation>,
    pub assessed_at: DateTime<Utc>,
}

impl AssessmentReport {
    pub fn sdg(&self, id: SdgId) -> Option<&SdgScoreView> {
        self.sdg_scores.iter().find(|view| view.sdg_id == id)
    }

    pub fn category(&self, category: Category) -> Option<&CategoryScoreView> {
        self.category_scores.get(&category)
    }

    pub fn total_bonus(&self) -> f64 {
        self.sdg_scores.iter().map(|view| view.bonus_points).sum()
    }
}

/// Fold a score breakdown into the report, or `None` when no goal produced a row.
pub(crate) fn aggregate(
    rules: &ScoringRules,
    breakdown: &ScoreBreakdown,
    library: &RecommendationLibrary,
    assessed_at: DateTime<Utc>,
) -> Option<AssessmentReport> {
    let sdg_scores: Vec<SdgScoreView> = rules
        .sdgs()
        .iter()
        .filter(|record| breakdown.direct.contains_key(&record.id))
        .map(|record| {
            let direct = breakdown.direct_score(record.id);
            let bonus = breakdown.bonus_points(record.id);
            let capped = round_to((direct + bonus).min(rules.score_cap()), 2);
            let performance = rules.performance_level(capped);

            SdgScoreView {
                sdg_id: record.id,
                name: record.name,
                direct_score: direct,
                bonus_points: bonus,
                final_score: round_to(capped, 1),
                performance,
                performance_color: rules.color_for(performance),
                category: record.category,
            }
        })
        .collect();

    if sdg_scores.is_empty() {
        return None;
    }

    let category_scores = category_scores(rules, &sdg_scores);
    let overall_score = round_to(mean(sdg_scores.iter().map(|view| view.final_score)), 1);
    let overall_performance = rules.performance_level(overall_score);

    let strengths = strengths(&sdg_scores);
    let weaknesses = weaknesses(&sdg_scores);

    let mut performance_distribution = BTreeMap::new();
    for view in &sdg_scores {
        *performance_distribution.entry(view.performance).or_insert(0) += 1;
    }

    let bonus_total: f64 = sdg_scores.iter().map(|view| view.bonus_points).sum();
    let insights = generate_insights(
        overall_score,
        overall_performance,
        &category_scores,
        bonus_total,
    );

    let architecture_metrics = ArchitectureMetrics {
        energy_performance: group_mean(&sdg_scores, &ENERGY_SDGS),
        water_efficiency: group_mean(&sdg_scores, &WATER_SDGS),
        material_sustainability: group_mean(&sdg_scores, &MATERIAL_SDGS),
    };

    let focus_recommendations = weaknesses
        .iter()
        .map(|view| FocusRecommendation {
            sdg_id: view.sdg_id,
            name: view.name,
            final_score: view.final_score,
            recommendations: library.for_sdg(view.sdg_id),
        })
        .collect();

    Some(AssessmentReport {
        sdg_scores,
        category_scores,
        overall_score,
        overall_performance,
        overall_color: rules.color_for(overall_performance),
        strengths,
        weaknesses,
        performance_distribution,
        insights,
        architecture_metrics,
        focus_recommendations,
        assessed_at,
    })
}

fn category_scores(
    rules: &ScoringRules,
    sdg_scores: &[SdgScoreView],
) -> BTreeMap<Category, CategoryScoreView> {
    Category::ordered()
        .into_iter()
        .filter_map(|category| {
            let members: Vec<f64> = sdg_scores
                .iter()
                .filter(|view| view.category == category)
                .map(|view| view.final_score)
                .collect();
            if members.is_empty() {
                return None;
            }

            let final_score = round_to(mean(members.into_iter()), 1);
            let performance = rules.performance_level(final_score);
            Some((
                category,
                CategoryScoreView {
                    final_score,
                    performance,
                    performance_color: rules.color_for(performance),
                },
            ))
        })
        .collect()
}

fn strengths(sdg_scores: &[SdgScoreView]) -> Vec<SdgScoreView> {
    let mut ranked = sdg_scores.to_vec();
    ranked.sort_by(|a, b| by_score(b, a).then(a.sdg_id.cmp(&b.sdg_id)));
    ranked.truncate(RANKED_LIMIT);
    ranked
}

fn weaknesses(sdg_scores: &[SdgScoreView]) -> Vec<SdgScoreView> {
    let mut ranked: Vec<SdgScoreView> = sdg_scores
        .iter()
        .filter(|view| view.final_score < WEAKNESS_THRESHOLD)
        .cloned()
        .collect();
    ranked.sort_by(|a, b| by_score(a, b).then(a.sdg_id.cmp(&b.sdg_id)));
    ranked.truncate(RANKED_LIMIT);
    ranked
}

fn by_score(a: &SdgScoreView, b: &SdgScoreView) -> Ordering {
    a.final_score.total_cmp(&b.final_score)
}

fn group_mean(sdg_scores: &[SdgScoreView], members: &[u8]) -> f64 {
    let scores: Vec<f64> = sdg_scores
        .iter()
        .filter(|view| members.contains(&view.sdg_id.0))
        .map(|view| view.final_score)
        .collect();
    if scores.is_empty() {
        return 0.0;
    }
    round_to(mean(scores.into_iter()), 1)
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
