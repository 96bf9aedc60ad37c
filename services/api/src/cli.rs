use crate::demo::{run_assess, run_demo, run_questions, AssessArgs, DemoArgs, QuestionsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use sdg_assessment::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "SDG Assessment",
    about = "Score building projects against the UN Sustainable Development Goals",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a JSON response file and print the report
    Assess(AssessArgs),
    /// List the questionnaire, optionally for a single SDG
    Questions(QuestionsArgs),
    /// Score a built-in sample project end to end
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Questions(args) => run_questions(args),
        Command::Demo(args) => run_demo(args),
    }
}
