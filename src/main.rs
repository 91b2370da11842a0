//! u-deadline command-line front end.
//!
//! Subcommands:
//! - `demo`: schedule a small built-in job set and print the table
//! - `schedule`: read a JSON array of jobs, print the result as JSON
//! - `experiment`: run timed scaling trials, print or save a JSON report

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use u_deadline::experiment::{run_experiments, ExperimentConfig, ExperimentReport};
use u_deadline::scheduler::{DeadlineScheduler, ScheduleKpi, SlotSearch, TieBreaker};
use u_deadline::validation::validate_jobs;
use u_deadline::{verify, Job, ScheduleResult};

#[derive(Parser)]
#[command(name = "u-deadline")]
#[command(about = "Maximum-reward scheduling of unit-time jobs with deadlines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Free-slot search structure
    #[arg(long, value_enum, default_value = "disjoint-set", global = true)]
    slot_search: SlotSearchArg,

    /// Ordering among jobs with equal reward
    #[arg(long, value_enum, default_value = "input-order", global = true)]
    tie_breaker: TieBreakerArg,
}

#[derive(Subcommand)]
enum Command {
    /// Schedule a built-in example and print it
    Demo,
    /// Schedule jobs from a JSON file (array of {id, deadline, reward})
    Schedule {
        /// Input file
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Run scaling experiments over random workloads
    Experiment {
        /// Input sizes (comma separated)
        #[arg(long, value_delimiter = ',', default_values_t = vec![10, 50, 100, 500, 1000, 2000, 5000, 10000])]
        sizes: Vec<usize>,

        /// Trials per size
        #[arg(long, default_value = "5")]
        trials: usize,

        /// Added to every trial seed
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Write the JSON report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SlotSearchArg {
    DisjointSet,
    LinearScan,
}

#[derive(Clone, Copy, ValueEnum)]
enum TieBreakerArg {
    InputOrder,
    EarliestDeadline,
}

impl From<SlotSearchArg> for SlotSearch {
    fn from(arg: SlotSearchArg) -> Self {
        match arg {
            SlotSearchArg::DisjointSet => SlotSearch::DisjointSet,
            SlotSearchArg::LinearScan => SlotSearch::LinearScan,
        }
    }
}

impl From<TieBreakerArg> for TieBreaker {
    fn from(arg: TieBreakerArg) -> Self {
        match arg {
            TieBreakerArg::InputOrder => TieBreaker::InputOrder,
            TieBreakerArg::EarliestDeadline => TieBreaker::EarliestDeadline,
        }
    }
}

#[derive(Serialize)]
struct ScheduleOutput<'a> {
    result: &'a ScheduleResult,
    kpi: ScheduleKpi,
    valid: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level: Level = cli
        .log_level
        .parse()
        .with_context(|| format!("invalid log level '{}'", cli.log_level))?;
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let scheduler = DeadlineScheduler::new()
        .with_slot_search(cli.slot_search.into())
        .with_tie_breaker(cli.tie_breaker.into());

    match cli.command {
        Command::Demo => run_demo(&scheduler),
        Command::Schedule { input } => run_schedule(&scheduler, &input),
        Command::Experiment {
            sizes,
            trials,
            seed,
            output,
        } => {
            let config = ExperimentConfig {
                sizes,
                trials,
                base_seed: seed,
                slot_search: scheduler.slot_search(),
            };
            run_experiment(&config, output)
        }
    }
}

fn run_demo(scheduler: &DeadlineScheduler) -> Result<()> {
    let jobs = vec![
        Job::new("0", 3, 50),
        Job::new("1", 2, 40),
        Job::new("2", 4, 60),
        Job::new("3", 2, 30),
        Job::new("4", 3, 45),
    ];

    println!("Input Jobs:");
    println!("{:<5} {:<10} {:<10}", "ID", "Deadline", "Reward");
    println!("{}", "-".repeat(27));
    for j in &jobs {
        println!("{:<5} {:<10} {:<10}", j.id, j.deadline, j.reward);
    }

    let result = scheduler.schedule(&jobs);

    println!("\nScheduled Jobs (Total Reward: {}):", result.total_reward);
    println!("{:<5} {:<10} {:<10} {:<6}", "ID", "Deadline", "Reward", "Slot");
    println!("{}", "-".repeat(34));
    for a in &result.accepted {
        println!(
            "{:<5} {:<10} {:<10} {:<6}",
            a.job.id, a.job.deadline, a.job.reward, a.slot
        );
    }
    for r in &result.rejected {
        println!("Rejected {} ({})", r.job.id, r.reason);
    }
    println!("\nValid Schedule: {}", verify(&result));
    Ok(())
}

fn run_schedule(scheduler: &DeadlineScheduler, input: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let jobs: Vec<Job> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse jobs from {}", input.display()))?;

    if let Err(errors) = validate_jobs(&jobs) {
        for e in &errors {
            warn!(kind = ?e.kind, "{}", e.message);
        }
    }

    let result = scheduler.schedule(&jobs);
    let output = ScheduleOutput {
        kpi: ScheduleKpi::calculate(&result, &jobs),
        valid: verify(&result),
        result: &result,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run_experiment(config: &ExperimentConfig, output: Option<PathBuf>) -> Result<()> {
    let report = run_experiments(config);
    let json = serde_json::to_string_pretty(&report)?;

    let Some(path) = output else {
        println!("{json}");
        return check_report(&report);
    };
    std::fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "report saved");

    println!("Summary of Experiments:");
    println!("{:<15} {:<20} {:<20}", "Input Size", "Avg Time (ms)", "Avg Scheduled");
    println!("{}", "-".repeat(55));
    for exp in &report.experiments {
        println!(
            "{:<15} {:<20.4} {:<20.1}",
            exp.input_size, exp.average_execution_time_ms, exp.average_scheduled_jobs
        );
    }
    check_report(&report)
}

fn check_report(report: &ExperimentReport) -> Result<()> {
    if !report.all_valid() {
        warn!("at least one trial produced an invalid schedule");
    }
    Ok(())
}
