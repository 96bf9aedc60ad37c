use super::common::*;
use crate::assessment::domain::{Category, PerformanceLevel, SdgId};
use crate::assessment::report::{
    export_to_dir, to_csv, to_json, write_json, AssessmentReport, ExportError,
};
use std::io::{self, Write};

fn energy_only_report() -> AssessmentReport {
    let service = standard_service();
    let responses = top_answers_for(service.engine().catalog(), &[7]);
    service
        .assess_at(&responses, fixed_time())
        .expect("energy-only project scores")
}

/// Accepts every byte but refuses to flush.
struct UnflushableSink(Vec<u8>);

impl Write for UnflushableSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, "device full"))
    }
}

fn ids(views: &[crate::assessment::report::views::SdgScoreView]) -> Vec<u8> {
    views.iter().map(|view| view.sdg_id.0).collect()
}

#[test]
fn maxed_energy_spills_bonus_onto_its_recipients() {
    let report = energy_only_report();

    let energy = report.sdg(SdgId(7)).expect("SDG 7 row");
    assert_eq!(energy.direct_score, 10.0);
    assert_eq!(energy.bonus_points, 0.0);
    assert_eq!(energy.final_score, 10.0);
    assert_eq!(energy.performance, PerformanceLevel::Exemplary);
    assert_eq!(energy.performance_color, "#28a745");

    for recipient in [1, 9, 13] {
        let view = report.sdg(SdgId(recipient)).expect("recipient row");
        assert_eq!(view.direct_score, 0.0);
        assert_eq!(view.bonus_points, 1.0);
        assert_eq!(view.final_score, 1.0);
        assert_eq!(view.performance, PerformanceLevel::Minimal);
    }

    assert_eq!(report.sdg_scores.len(), 17);
    assert_eq!(report.overall_score, 0.8);
    assert_eq!(report.overall_performance, PerformanceLevel::Minimal);
    assert_eq!(report.overall_color, "#dc3545");
    assert_eq!(report.total_bonus(), 3.0);
}

#[test]
fn category_scores_average_member_finals() {
    let report = energy_only_report();

    let prosperity = report.category(Category::Prosperity).expect("prosperity");
    assert_eq!(prosperity.final_score, 2.2);
    assert_eq!(prosperity.performance, PerformanceLevel::Minimal);

    let planet = report.category(Category::Planet).expect("planet");
    assert_eq!(planet.final_score, 0.2);
    assert_eq!(report.category(Category::Peace).expect("peace").final_score, 0.0);
    assert_eq!(
        report
            .category(Category::Peace)
            .expect("peace")
            .performance,
        PerformanceLevel::NoScore
    );
    assert_eq!(report.category_scores.len(), 5);
}

#[test]
fn planet_rollup_matches_its_members() {
    let service = standard_service();
    let responses = mixed_responses(service.engine().catalog());
    let report = service.assess_at(&responses, fixed_time()).expect("report");

    let members: Vec<f64> = [6, 12, 13, 14, 15]
        .into_iter()
        .map(|id| report.sdg(SdgId(id)).expect("planet member").final_score)
        .collect();
    let expected = (members.iter().sum::<f64>() / members.len() as f64 * 10.0).round() / 10.0;

    let planet = report.category(Category::Planet).expect("planet");
    assert_eq!(planet.final_score, expected);
    assert_eq!(
        planet.performance,
        service.engine().rules().performance_level(planet.final_score)
    );
}

#[test]
fn strengths_and_weaknesses_are_ranked_with_ties_broken_by_id() {
    let report = energy_only_report();

    assert_eq!(ids(&report.strengths), vec![7, 1, 9, 13, 2]);
    assert_eq!(ids(&report.weaknesses), vec![2, 3, 4, 5, 6]);
    assert!(report.weaknesses.iter().all(|view| view.final_score < 6.0));
}

#[test]
fn strong_projects_report_no_weaknesses() {
    let service = standard_service();
    let every_sdg: Vec<u8> = SdgId::all().map(|sdg| sdg.0).collect();
    let responses = top_answers_for(service.engine().catalog(), &every_sdg);
    let report = service.assess_at(&responses, fixed_time()).expect("report");

    assert!(report.weaknesses.is_empty());
    assert!(report.focus_recommendations.is_empty());
    assert_eq!(report.strengths.len(), 5);
    assert_eq!(report.overall_score, 10.0);
    assert_eq!(report.overall_performance, PerformanceLevel::Exemplary);
    assert!(report
        .sdg_scores
        .iter()
        .all(|view| view.final_score <= 10.0 && view.bonus_points <= 2.0));
}

#[test]
fn distribution_counts_every_goal_once() {
    let report = energy_only_report();

    assert_eq!(
        report.performance_distribution.get(&PerformanceLevel::Exemplary),
        Some(&1)
    );
    assert_eq!(
        report.performance_distribution.get(&PerformanceLevel::Minimal),
        Some(&3)
    );
    assert_eq!(
        report.performance_distribution.get(&PerformanceLevel::NoScore),
        Some(&13)
    );
    assert!(report
        .performance_distribution
        .get(&PerformanceLevel::Advanced)
        .is_none());
    assert_eq!(report.performance_distribution.values().sum::<usize>(), 17);
}

#[test]
fn insights_cover_overall_extremes_and_synergy() {
    let report = energy_only_report();

    assert_eq!(
        report.insights,
        vec![
            "Minimal Overall Performance (0.8/10). Significant opportunities for enhancement."
                .to_string(),
            "Strongest area: 'Prosperity' with an average score of 2.2/10.".to_string(),
            "Priority area: 'Partnership' with an average score of 0.0/10.".to_string(),
            "Strong Synergy! Your project earned 3.0 total bonus points from high performance in interconnected SDGs."
                .to_string(),
        ]
    );
}

#[test]
fn architecture_metrics_average_their_goal_groups() {
    let report = energy_only_report();

    assert_eq!(report.architecture_metrics.energy_performance, 5.5);
    assert_eq!(report.architecture_metrics.water_efficiency, 0.0);
    assert_eq!(report.architecture_metrics.material_sustainability, 0.0);
}

#[test]
fn weak_goals_come_with_phase_recommendations() {
    let report = energy_only_report();

    let focus: Vec<u8> = report
        .focus_recommendations
        .iter()
        .map(|focus| focus.sdg_id.0)
        .collect();
    assert_eq!(focus, ids(&report.weaknesses));
    assert!(report
        .focus_recommendations
        .iter()
        .all(|focus| !focus.recommendations.is_empty()));
}

#[test]
fn json_export_flattens_rows_and_keeps_labels() {
    let report = energy_only_report();
    let json = to_json(&report).expect("json export");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

    assert_eq!(value["sdg_scores"].as_array().map(Vec::len), Some(17));
    assert_eq!(value["sdg_scores"][6]["sdg_id"], 7);
    assert_eq!(value["sdg_scores"][6]["performance"], "Exemplary");
    assert_eq!(value["sdg_scores"][1]["performance"], "No Score");
    assert_eq!(value["category_scores"]["Prosperity"]["final_score"], 2.2);
    assert_eq!(value["performance_distribution"]["No Score"], 13);
    assert_eq!(value["assessed_at"], "2025-03-14T09:30:00Z");
}

#[test]
fn csv_export_writes_one_row_per_goal() {
    let report = energy_only_report();
    let csv = to_csv(&report).expect("csv export");
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 18);
    assert_eq!(
        lines[0],
        "sdg_id,name,direct_score,bonus_points,final_score,performance,performance_color,category"
    );
    assert_eq!(
        lines[7],
        "7,Affordable Energy,10.0,0.0,10.0,Exemplary,#28a745,Prosperity"
    );
    assert_eq!(lines[2], "2,Zero Hunger,0.0,0.0,0.0,No Score,#F1FAEE,People");
}

#[test]
fn exports_land_in_the_target_directory() {
    let report = energy_only_report();
    let dir = std::env::temp_dir().join(format!("sdg-export-{}", std::process::id()));

    let paths = export_to_dir(&report, &dir).expect("export succeeds");
    assert_eq!(
        paths.json.file_name().and_then(|name| name.to_str()),
        Some("sdg_assessment_20250314_093000.json")
    );
    assert!(paths.csv.exists());
    let written = std::fs::read_to_string(&paths.json).expect("json written");
    assert!(written.contains("\"overall_score\": 0.8"));

    std::fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn json_writes_surface_flush_failures() {
    let report = energy_only_report();

    let err = write_json(&report, UnflushableSink(Vec::new())).unwrap_err();
    assert!(matches!(err, ExportError::Io(ref source) if source.to_string() == "device full"));
}
