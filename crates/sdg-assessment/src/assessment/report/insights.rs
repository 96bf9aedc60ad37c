use super::super::domain::{Category, PerformanceLevel};
use super::views::CategoryScoreView;
use std::collections::BTreeMap;

const MAX_INSIGHTS: usize = 5;

pub(crate) fn generate_insights(
    overall_score: f64,
    overall_performance: PerformanceLevel,
    category_scores: &BTreeMap<Category, CategoryScoreView>,
    bonus_total: f64,
) -> Vec<String> {
    let mut insights = vec![overall_narrative(overall_score, overall_performance)];

    if let Some((best, worst)) = extremes(category_scores) {
        if best.0 != worst.0 {
            insights.push(format!(
                "Strongest area: '{}' with an average score of {:.1}/10.",
                best.0.label(),
                best.1
            ));
            insights.push(format!(
                "Priority area: '{}' with an average score of {:.1}/10.",
                worst.0.label(),
                worst.1
            ));
        }
    }

    if bonus_total > 0.0 {
        insights.push(format!(
            "Strong Synergy! Your project earned {:.1} total bonus points from high performance in interconnected SDGs.",
            bonus_total
        ));
    }

    insights.truncate(MAX_INSIGHTS);
    insights
}

fn overall_narrative(score: f64, level: PerformanceLevel) -> String {
    match level {
        PerformanceLevel::Exemplary => format!(
            "Exemplary Overall Performance ({score:.1}/10). A leading example of sustainable architecture."
        ),
        PerformanceLevel::Advanced => format!(
            "Advanced Overall Performance ({score:.1}/10). Strong alignment with key sustainability goals."
        ),
        PerformanceLevel::Basic => format!(
            "Basic Overall Performance ({score:.1}/10). A good foundation with clear areas for improvement."
        ),
        PerformanceLevel::Minimal | PerformanceLevel::NoScore => format!(
            "Minimal Overall Performance ({score:.1}/10). Significant opportunities for enhancement."
        ),
    }
}

/// Best and worst categories; ties go to the alphabetically first label.
fn extremes(
    category_scores: &BTreeMap<Category, CategoryScoreView>,
) -> Option<((Category, f64), (Category, f64))> {
    let mut by_label = Category::ordered();
    by_label.sort_by_key(|category| category.label());

    let mut scored = by_label.into_iter().filter_map(|category| {
        category_scores
            .get(&category)
            .map(|view| (category, view.final_score))
    });

    let first = scored.next()?;
    Some(scored.fold((first, first), |(best, worst), candidate| {
        let best = if candidate.1 > best.1 { candidate } else { best };
        let worst = if candidate.1 < worst.1 { candidate } else { worst };
        (best, worst)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(final_score: f64) -> CategoryScoreView {
        CategoryScoreView {
            final_score,
            performance: PerformanceLevel::Basic,
            performance_color: "#ffc107",
        }
    }

    #[test]
    fn single_category_skips_best_and_worst() {
        let scores = BTreeMap::from([(Category::Peace, view(4.0))]);
        let insights = generate_insights(4.0, PerformanceLevel::Basic, &scores, 0.0);
        assert_eq!(insights.len(), 1);
        assert!(insights[0].starts_with("Basic Overall Performance (4.0/10)"));
    }

    #[test]
    fn equal_categories_report_the_alphabetically_first_label() {
        let scores = BTreeMap::from([
            (Category::Planet, view(5.0)),
            (Category::Prosperity, view(5.0)),
            (Category::Peace, view(2.0)),
            (Category::Partnership, view(2.0)),
        ]);
        let insights = generate_insights(4.0, PerformanceLevel::Basic, &scores, 1.5);
        assert_eq!(
            insights,
            vec![
                "Basic Overall Performance (4.0/10). A good foundation with clear areas for improvement."
                    .to_string(),
                "Strongest area: 'Planet' with an average score of 5.0/10.".to_string(),
                "Priority area: 'Partnership' with an average score of 2.0/10.".to_string(),
                "Strong Synergy! Your project earned 1.5 total bonus points from high performance in interconnected SDGs."
                    .to_string(),
            ]
        );
    }

    #[test]
    fn no_score_overall_reads_as_minimal() {
        let insights = generate_insights(0.0, PerformanceLevel::NoScore, &BTreeMap::new(), 0.0);
        assert_eq!(
            insights,
            vec!["Minimal Overall Performance (0.0/10). Significant opportunities for enhancement."
                .to_string()]
        );
    }
}
