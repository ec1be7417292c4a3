use super::render::{print_snapshot, OutputFormat};
use super::server;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::telemetry;
use crate::workflows::sourcing::{
    analyze_inputs, DashboardEvent, DashboardState, InputSources, InsightEngine,
};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Sprints Intelligence",
    about = "Extract sourcing signals and recommendations from recruiting notes",
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
    /// Analyze recruiting notes read from files
    Analyze(AnalyzeArgs),
    /// Print the curated demo dashboard
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

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Sales Navigator search links, one per line
    #[arg(long)]
    pub(crate) search_links: Option<PathBuf>,
    /// End-of-day sourcing updates
    #[arg(long)]
    pub(crate) daily_updates: Option<PathBuf>,
    /// Hiring manager meeting transcript snippets
    #[arg(long)]
    pub(crate) transcript: Option<PathBuf>,
    /// Sprint retrospective notes
    #[arg(long)]
    pub(crate) retro_notes: Option<PathBuf>,
    /// Pasted pipeline sheet summary
    #[arg(long)]
    pub(crate) sheet_summary: Option<PathBuf>,
    /// Emit the snapshot as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Emit the snapshot as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
    /// Run the rule engine over the demo inputs instead of showing the curated record
    #[arg(long)]
    pub(crate) analyze: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Analyze(args) => run_analyze(args),
        Command::Demo(args) => run_demo(args),
    }
}

fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let AnalyzeArgs {
        search_links,
        daily_updates,
        transcript,
        retro_notes,
        sheet_summary,
        json,
    } = args;

    let sources = InputSources {
        search_links,
        daily_updates,
        transcript,
        retro_notes,
        sheet_summary,
    };
    let inputs = sources.load()?;
    let engine = InsightEngine::new(config.insights);
    let snapshot = analyze_inputs(inputs, &engine, Utc::now());

    print_snapshot(Some(&snapshot), OutputFormat::from_flag(json))
}

fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let format = OutputFormat::from_flag(args.json);
    let engine = InsightEngine::default();

    let state = DashboardState::empty().apply(DashboardEvent::LoadDemo, &engine);
    if args.analyze {
        let analyzed = state.apply(DashboardEvent::Analyze { at: Utc::now() }, &engine);
        return print_snapshot(analyzed.snapshot.as_ref(), format);
    }

    print_snapshot(state.snapshot.as_ref(), format)
}
