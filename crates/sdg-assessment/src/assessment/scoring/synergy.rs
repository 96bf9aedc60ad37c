use super::super::domain::SdgId;
use super::super::rules::ScoringRules;
use super::{round_to, ScoringError};
use std::collections::BTreeMap;

/// Spread bonus points from high-scoring source SDGs to their recipients.
///
/// Contributions are non-negative and every step is clamped to the cap, so each
/// recipient ends at `min(cap, sum of contributions)` whatever the source order.
pub(crate) fn synergy_bonuses(
    rules: &ScoringRules,
    direct: &BTreeMap<SdgId, f64>,
) -> Result<BTreeMap<SdgId, f64>, ScoringError> {
    let cap = rules.bonus_cap();
    let mut bonus: BTreeMap<SdgId, f64> = rules
        .sdgs()
        .iter()
        .map(|record| (record.id, 0.0))
        .collect();

    for (source, recipients) in rules.synergies() {
        let Some(&score) = direct.get(source) else {
            continue;
        };
        let contribution = rules.synergy_bonus(score);
        if contribution <= 0.0 {
            continue;
        }

        for recipient in recipients {
            let current = bonus
                .get_mut(recipient)
                .ok_or(ScoringError::UnknownSynergySdg { sdg: recipient.0 })?;
            *current = apply_capped(*current, contribution, cap);
        }
    }

    Ok(bonus)
}

/// Add a contribution without letting the running total pass the cap.
pub(crate) fn apply_capped(current: f64, contribution: f64, cap: f64) -> f64 {
    if current >= cap {
        return current;
    }
    round_to(current + contribution.min(cap - current), 2)
}
