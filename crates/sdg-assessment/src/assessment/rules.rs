use super::domain::{Category, PerformanceLevel, SdgId, SdgRecord};
use serde::Serialize;
use std::collections::BTreeMap;

const FALLBACK_COLOR: &str = "#cccccc";

/// Inclusive score range mapped to a performance label and display color.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PerformanceBand {
    pub level: PerformanceLevel,
    pub min: f64,
    pub max: f64,
    pub color: &'static str,
}

impl PerformanceBand {
    pub fn contains(&self, score: f64) -> bool {
        self.min <= score && score <= self.max
    }
}

/// Bonus a synergy source hands to each recipient once its direct score reaches `min_direct`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BonusThreshold {
    pub min_direct: f64,
    pub bonus: f64,
}

/// Immutable lookup tables shared by every scoring invocation.
#[derive(Debug, Clone)]
pub struct ScoringRules {
    sdgs: Vec<SdgRecord>,
    bands: Vec<PerformanceBand>,
    synergies: BTreeMap<SdgId, Vec<SdgId>>,
    bonus_thresholds: Vec<BonusThreshold>,
    bonus_cap: f64,
    score_cap: f64,
}

impl ScoringRules {
    pub fn standard() -> Self {
        Self {
            sdgs: standard_sdgs(),
            bands: standard_bands(),
            synergies: standard_synergies(),
            bonus_thresholds: vec![
                BonusThreshold {
                    min_direct: 9.0,
                    bonus: 1.0,
                },
                BonusThreshold {
                    min_direct: 8.0,
                    bonus: 0.7,
                },
                BonusThreshold {
                    min_direct: 7.0,
                    bonus: 0.5,
                },
            ],
            bonus_cap: 2.0,
            score_cap: 10.0,
        }
    }

    /// Replace the synergy adjacency list, keeping every other table.
    pub fn with_synergies(mut self, synergies: BTreeMap<SdgId, Vec<SdgId>>) -> Self {
        self.synergies = synergies;
        self
    }

    /// Replace the goal table. Questions or synergies pointing at dropped goals fail at scoring time.
    pub fn with_sdgs(mut self, sdgs: Vec<SdgRecord>) -> Self {
        self.sdgs = sdgs;
        self
    }

    pub fn sdgs(&self) -> &[SdgRecord] {
        &self.sdgs
    }

    pub fn sdg(&self, id: SdgId) -> Option<&SdgRecord> {
        self.sdgs.iter().find(|record| record.id == id)
    }

    pub fn is_known(&self, id: SdgId) -> bool {
        self.sdg(id).is_some()
    }

    pub fn category_of(&self, id: SdgId) -> Option<Category> {
        self.sdg(id).map(|record| record.category)
    }

    pub fn sdgs_in(&self, category: Category) -> Vec<SdgId> {
        self.sdgs
            .iter()
            .filter(|record| record.category == category)
            .map(|record| record.id)
            .collect()
    }

    pub fn bands(&self) -> &[PerformanceBand] {
        &self.bands
    }

    /// First band containing the score wins; scores falling between bands read as "No Score".
    pub fn performance_level(&self, score: f64) -> PerformanceLevel {
        self.bands
            .iter()
            .find(|band| band.contains(score))
            .map(|band| band.level)
            .unwrap_or(PerformanceLevel::NoScore)
    }

    pub fn color_for(&self, level: PerformanceLevel) -> &'static str {
        self.bands
            .iter()
            .find(|band| band.level == level)
            .map(|band| band.color)
            .unwrap_or(FALLBACK_COLOR)
    }

    pub fn synergies(&self) -> &BTreeMap<SdgId, Vec<SdgId>> {
        &self.synergies
    }

    pub fn recipients(&self, source: SdgId) -> &[SdgId] {
        self.synergies
            .get(&source)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn synergy_bonus(&self, direct_score: f64) -> f64 {
        self.bonus_thresholds
            .iter()
            .find(|threshold| direct_score >= threshold.min_direct)
            .map(|threshold| threshold.bonus)
            .unwrap_or(0.0)
    }

    pub fn bonus_cap(&self) -> f64 {
        self.bonus_cap
    }

    pub fn score_cap(&self) -> f64 {
        self.score_cap
    }
}

fn standard_bands() -> Vec<PerformanceBand> {
    vec![
        PerformanceBand {
            level: PerformanceLevel::Exemplary,
            min: 9.0,
            max: 10.0,
            color: "#28a745",
        },
        PerformanceBand {
            level: PerformanceLevel::Advanced,
            min: 6.0,
            max: 8.99,
            color: "#90ee90",
        },
        PerformanceBand {
            level: PerformanceLevel::Basic,
            min: 3.0,
            max: 5.99,
            color: "#ffc107",
        },
        PerformanceBand {
            level: PerformanceLevel::Minimal,
            min: 0.1,
            max: 2.99,
            color: "#dc3545",
        },
        PerformanceBand {
            level: PerformanceLevel::NoScore,
            min: 0.0,
            max: 0.0,
            color: "#F1FAEE",
        },
    ]
}

fn standard_synergies() -> BTreeMap<SdgId, Vec<SdgId>> {
    [
        (1, [7, 10, 11]),
        (2, [3, 12, 15]),
        (3, [4, 11, 16]),
        (6, [3, 11, 14]),
        (7, [1, 9, 13]),
        (8, [1, 9, 12]),
        (11, [3, 10, 13]),
        (12, [8, 13, 15]),
        (13, [7, 11, 15]),
    ]
    .into_iter()
    .map(|(source, recipients)| (SdgId(source), recipients.map(SdgId).to_vec()))
    .collect()
}

fn standard_sdgs() -> Vec<SdgRecord> {
    use Category::*;

    [
        (1, "No Poverty", "End poverty in all its forms everywhere", People),
        (2, "Zero Hunger", "End hunger, achieve food security and improved nutrition", People),
        (3, "Good Health", "Ensure healthy lives and promote well-being for all", People),
        (4, "Quality Education", "Ensure inclusive and equitable quality education", People),
        (5, "Gender Equality", "Achieve gender equality and empower all women and girls", People),
        (6, "Clean Water", "Ensure availability and sustainable management of water", Planet),
        (7, "Affordable Energy", "Ensure access to affordable, reliable, sustainable energy", Prosperity),
        (8, "Decent Work", "Promote sustained, inclusive economic growth and employment", Prosperity),
        (9, "Innovation", "Build resilient infrastructure, promote innovation", Prosperity),
        (10, "Reduced Inequalities", "Reduce inequality within and among countries", Prosperity),
        (11, "Sustainable Cities", "Make cities and human settlements inclusive and sustainable", Prosperity),
        (12, "Responsible Consumption", "Ensure sustainable consumption and production patterns", Planet),
        (13, "Climate Action", "Take urgent action to combat climate change", Planet),
        (14, "Life Below Water", "Conserve and sustainably use the oceans, seas and marine resources", Planet),
        (15, "Life on Land", "Protect, restore and promote terrestrial ecosystems", Planet),
        (16, "Peace & Justice", "Promote peaceful and inclusive societies for sustainable development", Peace),
        (17, "Partnerships", "Strengthen the means of implementation and revitalize partnerships", Partnership),
    ]
    .into_iter()
    .map(|(id, name, description, category)| SdgRecord {
        id: SdgId(id),
        name,
        description,
        category,
    })
    .collect()
}
