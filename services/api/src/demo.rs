use crate::infra::{load_responses, sample_responses};
use clap::Args;
use sdg_assessment::assessment::report::export_to_dir;
use sdg_assessment::assessment::{
    AssessmentReport, AssessmentService, Category, ProjectPhase, QuestionFormat, SdgId,
};
use sdg_assessment::config::AppConfig;
use sdg_assessment::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file mapping question ids to answers
    #[arg(long)]
    pub(crate) responses: PathBuf,
    /// Write JSON and CSV exports next to the printed report
    #[arg(long)]
    pub(crate) export: bool,
    /// Override the configured export directory
    #[arg(long)]
    pub(crate) export_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Only list questions mapped to this SDG (1-17)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=17))]
    pub(crate) sdg: Option<u8>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Write JSON and CSV exports of the sample report
    #[arg(long)]
    pub(crate) export: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        responses,
        export,
        export_dir,
    } = args;

    let service = AssessmentService::standard();
    let responses = load_responses(&responses)?;
    let report = service.assess(&responses)?;
    render_report(&report);

    if export {
        export_report(&report, export_dir)?;
    }
    Ok(())
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let service = AssessmentService::standard();
    let catalog = service.engine().catalog();

    for section in catalog.sections() {
        let questions: Vec<_> = section
            .questions
            .iter()
            .filter(|question| args.sdg.map_or(true, |sdg| question.sdg == SdgId(sdg)))
            .collect();
        if questions.is_empty() {
            continue;
        }

        println!("\nSection {}", section.title);
        for question in questions {
            let kind = match question.format {
                QuestionFormat::SingleChoice => "single choice",
                QuestionFormat::MultiChoice { .. } => "select all",
            };
            println!("- [{}] {} ({}, {})", question.id, question.text, question.sdg, kind);
            for option in &question.options {
                println!("    * {} ({} pts)", option.label, option.points);
            }
        }
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = AssessmentService::standard();
    let responses = sample_responses(service.engine().catalog());

    println!("SDG assessment demo");
    println!(
        "Sample project answered {} of {} questions",
        responses.len(),
        service.engine().catalog().len()
    );

    let report = service.assess(&responses)?;
    render_report(&report);

    if let Some(weakest) = report.focus_recommendations.first() {
        println!(
            "\nDesign-phase actions for {} ({:.1}/10)",
            weakest.name, weakest.final_score
        );
        for action in weakest.recommendations.for_phase(ProjectPhase::Design) {
            println!("- {}", action);
        }
    }

    if args.export {
        export_report(&report, None)?;
    }
    Ok(())
}

fn export_report(report: &AssessmentReport, dir: Option<PathBuf>) -> Result<(), AppError> {
    let dir = match dir {
        Some(dir) => dir,
        None => AppConfig::load()?.export.export_dir,
    };
    let paths = export_to_dir(report, &dir)?;
    println!("\nExported {}", paths.json.display());
    println!("Exported {}", paths.csv.display());
    Ok(())
}

pub(crate) fn render_report(report: &AssessmentReport) {
    println!(
        "\nOverall score: {:.1}/10 ({})",
        report.overall_score,
        report.overall_performance.label()
    );
    println!("Assessed at {}", report.assessed_at.to_rfc3339());

    println!("\nSDG scores");
    for view in &report.sdg_scores {
        println!(
            "- {:>2} {:<24} direct {:>5.2} | bonus {:>4.2} | final {:>4.1} ({})",
            view.sdg_id.0,
            view.name,
            view.direct_score,
            view.bonus_points,
            view.final_score,
            view.performance.label()
        );
    }

    println!("\nCategories");
    for category in Category::ordered() {
        if let Some(view) = report.category(category) {
            println!(
                "- {}: {:.1}/10 ({})",
                category.label(),
                view.final_score,
                view.performance.label()
            );
        }
    }

    let metrics = &report.architecture_metrics;
    println!(
        "\nEnergy {:.1} | Water {:.1} | Materials {:.1}",
        metrics.energy_performance, metrics.water_efficiency, metrics.material_sustainability
    );

    if report.strengths.is_empty() {
        println!("\nStrengths: none");
    } else {
        println!("\nStrengths");
        for view in &report.strengths {
            println!("- {} ({:.1})", view.name, view.final_score);
        }
    }

    if report.weaknesses.is_empty() {
        println!("\nWeaknesses: none");
    } else {
        println!("\nWeaknesses");
        for view in &report.weaknesses {
            println!("- {} ({:.1})", view.name, view.final_score);
        }
    }

    if !report.insights.is_empty() {
        println!("\nInsights");
        for insight in &report.insights {
            println!("- {}", insight);
        }
    }
}
