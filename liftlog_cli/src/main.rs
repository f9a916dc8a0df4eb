use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use liftlog_core::config::PlateConfig;
use liftlog_core::plates::format_weight;
use liftlog_core::rep_max::MAX_RELIABLE_REPS;
use liftlog_core::*;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "liftlog")]
#[command(about = "Training consistency and barbell math", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the weekly-skip consistency streak
    Streak {
        /// Activity log, one date or RFC 3339 timestamp per line
        #[arg(long)]
        file: PathBuf,

        /// Evaluate as of this day instead of the local date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Show the per-week breakdown
        #[arg(long)]
        weeks: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Estimate one- and ten-rep maxes from a set
    #[command(allow_negative_numbers = true)]
    E1rm {
        weight: f64,
        reps: u32,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Work out which plates to load for a target weight
    #[command(allow_negative_numbers = true)]
    Plates {
        target: f64,

        /// Bar weight (defaults to config)
        #[arg(long)]
        bar: Option<f64>,

        /// Number of loaded sides (defaults to config)
        #[arg(long)]
        sides: Option<u32>,

        /// Available plate denominations, comma separated (defaults to config)
        #[arg(long, value_delimiter = ',')]
        plates: Option<Vec<f64>>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        liftlog_core::logging::init_with_level("debug");
    } else {
        liftlog_core::logging::init();
    }

    let config = match &cli.config {
        Some(path) => {
            tracing::debug!("Using config override {:?}", path);
            Config::load_from(path)?
        }
        None => Config::load()?,
    };

    match cli.command {
        Commands::Streak {
            file,
            today,
            weeks,
            json,
        } => cmd_streak(file, today, weeks, json),
        Commands::E1rm { weight, reps, json } => cmd_e1rm(weight, reps, json, &config),
        Commands::Plates {
            target,
            bar,
            sides,
            plates,
            json,
        } => {
            let mut plate_config = config.plates.clone();
            if let Some(bar) = bar {
                tracing::debug!("Bar weight overridden to {}", bar);
                plate_config.bar_weight = bar;
            }
            if let Some(sides) = sides {
                tracing::debug!("Loading sides overridden to {}", sides);
                plate_config.loading_sides = sides;
            }
            if let Some(plates) = plates {
                tracing::debug!("Plate inventory overridden to {:?}", plates);
                plate_config.available = plates;
            }
            cmd_plates(target, &plate_config, json)
        }
    }
}

#[derive(Serialize)]
struct StreakReport {
    today: NaiveDate,
    #[serde(flatten)]
    result: StreakResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    weeks: Option<Vec<WeekSummary>>,
}

fn cmd_streak(file: PathBuf, today: Option<NaiveDate>, weeks: bool, json: bool) -> Result<()> {
    let records = load_activity_log(&file)?;
    let today = today.unwrap_or_else(|| SystemClock.today());
    tracing::debug!("Evaluating {} entries as of {}", records.len(), today);
    let engine = StreakEngine::new(FixedClock(today));

    let report = StreakReport {
        today,
        result: engine.calculate_streak(records.iter().copied()),
        weeks: weeks.then(|| engine.week_breakdown(records.iter().copied())),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let result = &report.result;
    let state = match result.state {
        StreakState::Active => "active",
        StreakState::Resting => "resting",
        StreakState::Broken => "broken",
    };
    println!("State: {}", state);
    println!("Streak: {} days", result.streak_days);
    println!("Skips remaining: {}", result.skips_remaining);
    println!("Skip budget resets: {}", result.next_reset_date);
    if result.broke_today {
        println!("Streak broke today");
    }

    if let Some(weeks) = &report.weeks {
        println!();
        for week in weeks {
            println!(
                "  {}  {} active  {} missed  {}",
                week.week_start,
                week.active_days,
                week.misses,
                if week.counted { "counted" } else { "broken" }
            );
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct RepMaxReport {
    weight: f64,
    reps: u32,
    e1rm: f64,
    e10rm: f64,
}

fn cmd_e1rm(weight: f64, reps: u32, json: bool, config: &Config) -> Result<()> {
    let (Some(e1rm), Some(e10rm)) = (
        estimate_one_rep_max(weight, reps),
        estimate_ten_rep_max(weight, reps),
    ) else {
        return Err(Error::Other(format!(
            "Invalid input: weight must be positive and reps between 1 and {}",
            MAX_RELIABLE_REPS
        )));
    };

    let (e1rm, e10rm) = if config.rep_max.round_estimates {
        (round_to_plate_increment(e1rm), round_to_plate_increment(e10rm))
    } else {
        (e1rm, e10rm)
    };

    if json {
        let report = RepMaxReport {
            weight,
            reps,
            e1rm,
            e10rm,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} x {}", format_weight(weight), reps);
    println!("  Estimated 1RM:  {}", format_weight(e1rm));
    println!("  Estimated 10RM: {}", format_weight(e10rm));
    Ok(())
}

#[derive(Serialize)]
struct PlateReport<'a> {
    target: f64,
    bar_weight: f64,
    loading_sides: u32,
    #[serde(flatten)]
    loadout: &'a PlateLoadout,
    colors: Vec<PlateColor>,
}

fn cmd_plates(target: f64, plate_config: &PlateConfig, json: bool) -> Result<()> {
    plate_config.validate()?;
    let loadout = plate_config.loadout_for(target);

    if json {
        let report = PlateReport {
            target,
            bar_weight: plate_config.bar_weight,
            loading_sides: plate_config.loading_sides,
            loadout: &loadout,
            colors: loadout
                .plates
                .iter()
                .map(|plate| color_for_plate_weight(*plate))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Target: {} (bar {}, {} sides)",
        format_weight(target),
        format_weight(plate_config.bar_weight),
        plate_config.loading_sides
    );
    if loadout.is_bar_only() {
        println!("Per side: {}", format_loadout(&loadout));
    } else {
        println!(
            "Per side: {} ({})",
            format_loadout(&loadout),
            format_weight(loadout.per_side_weight())
        );
    }
    for plate in &loadout.plates {
        println!(
            "  {:>6}  {}",
            format_weight(*plate),
            color_for_plate_weight(*plate).name()
        );
    }
    println!(
        "Total: {}{}",
        format_weight(loadout.total_weight),
        if loadout.is_exact { "" } else { " (not exact)" }
    );
    Ok(())
}
