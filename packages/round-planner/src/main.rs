//! Round planner CLI - prints and exports role schedules for a table.
//!
//! Runs the same role rotation the game uses, round after round, so a host
//! can see who will DJ, play, steal or sit out before the night starts.

mod analysis;
mod output;
mod roster;
mod schedule;
mod types;

use std::path::PathBuf;

use analysis::{print_fairness, print_schedule, tally_roles};
use clap::Parser;
use output::OutputWriter;
use schedule::{build_schedule, full_rotation};
use tracing::{info, warn};
use tune_domain::config::GameplaySettings;
use types::OutputFormat;

#[derive(Parser)]
#[command(name = "round-planner")]
#[command(about = "Plan role rotation for a Name That Tune game")]
struct Args {
    /// Number of generated players ("Player 1".."Player N")
    #[arg(short, long, conflicts_with = "roster", required_unless_present = "roster")]
    players: Option<usize>,

    /// JSON file with an array of participants
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Number of rounds to plan (default: one full rotation)
    #[arg(short, long)]
    rounds: Option<u32>,

    /// First round number to plan
    #[arg(long, default_value = "1")]
    start_round: u32,

    /// Participant pinned as DJ for every round (overrides the settings file)
    #[arg(long)]
    all_time_dj: Option<i64>,

    /// JSON file with gameplay settings
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for exported schedules
    #[arg(long, default_value = "./round-plans")]
    output_dir: PathBuf,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,
}

fn load_settings(path: Option<&PathBuf>) -> Result<GameplaySettings, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(GameplaySettings::default());
    };
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read settings {}: {e}", path.display()))?;
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    Ok(GameplaySettings::from_json(Some(&json))?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize logging - silent by default, only show warnings/errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = load_settings(args.settings.as_ref())?;
    let all_time_dj = args.all_time_dj.or(settings.all_time_dj);

    let participants = match (&args.roster, args.players) {
        (Some(path), _) => roster::load_roster(path)?,
        (None, Some(count)) => roster::generated_roster(count)?,
        (None, None) => return Err("either --players or --roster is required".into()),
    };

    if let Some(id) = all_time_dj {
        if !participants.iter().any(|p| p.participant_id == id) {
            warn!(all_time_dj = id, "all-time DJ is not seated; every seat will rotate");
        }
    }

    let rounds = args
        .rounds
        .unwrap_or_else(|| full_rotation(&participants, all_time_dj));
    info!(
        participants = participants.len(),
        start_round = args.start_round,
        rounds,
        ?all_time_dj,
        "planning rounds"
    );

    let schedule = build_schedule(&participants, args.start_round, rounds, all_time_dj)?;

    let mut output_writer = OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;
    for round in &schedule {
        if let Err(e) = output_writer.write_round(round) {
            warn!("Failed to write round {}: {}", round.round_number, e);
        }
    }

    let (rounds_path, csv_path) = output_writer.output_paths();
    let (rounds_path, csv_path) = (rounds_path.to_path_buf(), csv_path.to_path_buf());
    output_writer.finish()?;

    if args.show_output {
        info!("Rounds written to: {}", rounds_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
    }

    print_schedule(&schedule);
    print_fairness(&tally_roles(&participants, &schedule));

    Ok(())
}
