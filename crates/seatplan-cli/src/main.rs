//! SeatPlan terminal front end.
//!
//! Renders seating charts, drives delete mode from the keyboard, and runs the
//! headless self-check sweep. All seating decisions live in `seatplan-logic`.
//!
//! Usage:
//!   seatplan generate -p 32 -r 5 -c 6 --delete 0-0 --delete 4-5
//!   seatplan interactive --seed 7
//!   seatplan check --verbose

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use seatplan_logic::constants::defaults;
use seatplan_logic::render::{render_text, RenderOptions};
use seatplan_logic::seat::SeatId;
use seatplan_logic::session::{ClickOutcome, DeletionPolicy, Session};
use seatplan_logic::validation::RawInputs;

mod check;
mod config;
mod interactive;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "seatplan")]
#[command(about = "SeatPlan - random seating charts with deletable seats", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Seed for reproducible charts (default: random)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Whether occupied seats may be deleted
    #[arg(long, global = true, value_enum)]
    policy: Option<PolicyArg>,

    /// JSON config file; flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log generation details (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one chart and print it
    Generate {
        /// Number of people (1-100)
        #[arg(short, long, default_value_t = defaults::PEOPLE.to_string())]
        people: String,
        /// Number of rows (1-20)
        #[arg(short, long, default_value_t = defaults::ROWS.to_string())]
        rows: String,
        /// Number of columns (1-20)
        #[arg(short, long, default_value_t = defaults::COLUMNS.to_string())]
        columns: String,
        /// Seat to delete, as row-col (repeatable)
        #[arg(long = "delete", value_name = "ROW-COL")]
        deleted: Vec<SeatId>,
        /// Print the chart as JSON
        #[arg(long)]
        json: bool,
        /// Omit row and column numbers
        #[arg(long)]
        no_headers: bool,
    },
    /// Keep a session open and read commands from stdin
    Interactive,
    /// Run the logic self-check sweep
    Check,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Allow,
    Protect,
}

impl From<PolicyArg> for DeletionPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Allow => DeletionPolicy::AllowOccupied,
            PolicyArg::Protect => DeletionPolicy::ProtectOccupied,
        }
    }
}

/// Exit status for rejected form input.
const EXIT_INVALID_INPUT: u8 = 2;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

pub(crate) fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(policy) = cli.policy {
        config.session.deletion_policy = policy.into();
    }
    log::debug!("effective config: {config:?}");

    match cli.command {
        Commands::Generate {
            people,
            rows,
            columns,
            deleted,
            json,
            no_headers,
        } => {
            let raw = RawInputs::new(people, rows, columns);
            let opts = RenderOptions {
                headers: !no_headers,
            };
            run_generate(&config, &raw, &deleted, json, opts)
        }
        Commands::Interactive => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            interactive::run(&config, stdin.lock(), stdout.lock())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check => Ok(if check::run(cli.verbose) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }),
    }
}

fn run_generate(
    config: &CliConfig,
    raw: &RawInputs,
    deleted: &[SeatId],
    json: bool,
    opts: RenderOptions,
) -> Result<ExitCode> {
    let mut rng = make_rng(config.seed);
    let mut session = Session::new(config.session.clone());

    if let Err(err) = session.generate(raw, &mut rng) {
        log::warn!("rejected input {raw:?}");
        eprintln!("{err}");
        return Ok(ExitCode::from(EXIT_INVALID_INPUT));
    }

    // Deletions go through the same click path a user would take
    if !deleted.is_empty() {
        session.toggle_delete_mode();
        for &seat in deleted {
            match session.click_seat(seat, &mut rng) {
                ClickOutcome::Deleted(_) => log::info!("deleted seat {seat}"),
                ClickOutcome::Restored(_) => log::info!("seat {seat} listed twice, restored"),
                ClickOutcome::Ignored(reason) => log::warn!("seat {seat} not deleted: {reason:?}"),
            }
        }
    }

    let Some(chart) = session.chart() else {
        anyhow::bail!("no chart after successful generation");
    };
    if json {
        println!("{}", serde_json::to_string_pretty(chart)?);
    } else {
        print!("{}", render_text(chart, opts));
    }
    Ok(ExitCode::SUCCESS)
}
