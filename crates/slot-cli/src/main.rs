//! `slots` CLI — list bookable appointment slots for one day of data.
//!
//! ## Usage
//!
//! ```sh
//! # Compute 60-minute slots for one person (stdin → stdout, JSON)
//! cat day.json | slots compute
//!
//! # Two people, 30-minute slots, from file to file
//! slots compute -i day.json -o slots.json --duration 30 --quantity 2
//!
//! # Reject any overlap with bookings and blackouts, print a sorted list
//! slots compute -i day.json --strict-overlap --sort --format text
//!
//! # Show the durations offered by the booking form
//! slots durations
//! ```
//!
//! The input is a JSON object with `business_hours`, `blocking_hours`, and
//! `appointments` arrays of `{start_time, end_time[, quantity]}` records, with
//! times written like `"09:00 am"`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use slot_engine::{
    sort_chronologically, AvailableSlot, DayInput, OverlapPolicy, SlotConfig, SlotRecord,
    SlotRequest, DEFAULT_STEP_MINUTES,
};
use std::io::{self, Read};
use tracing::{debug, info, Level};

/// Slot lengths offered by the booking form, in minutes.
const DURATION_OPTIONS: [i64; 3] = [30, 60, 120];

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "List bookable appointment slots from business hours, blackouts, and bookings"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute available slots for one day
    Compute {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Slot length in minutes
        #[arg(short, long, default_value_t = 60, allow_negative_numbers = true)]
        duration: i64,
        /// Units of capacity the booking needs at once
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        quantity: i64,
        /// Minutes between candidate start times
        #[arg(long, default_value_t = DEFAULT_STEP_MINUTES)]
        step: u32,
        /// Reject candidates that overlap a blackout or booking at all,
        /// not only those with an endpoint inside one
        #[arg(long)]
        strict_overlap: bool,
        /// Sort slots chronologically across business-hour windows
        #[arg(long)]
        sort: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// List the slot durations offered by the booking form
    Durations,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Pretty-printed JSON array of {start_time, end_time}
    Json,
    /// One "start - end" line per slot
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Compute {
            input,
            output,
            duration,
            quantity,
            step,
            strict_overlap,
            sort,
            format,
        } => {
            let json = read_input(input.as_deref())?;
            let day = DayInput::from_json(&json).context("Failed to parse day input")?;
            debug!(
                business_hours = day.business_hours.len(),
                blocking_hours = day.blocking_hours.len(),
                appointments = day.appointments.len(),
                "loaded day input"
            );

            let request = SlotRequest::new(duration, quantity).context("Invalid slot request")?;
            let config = SlotConfig {
                step_minutes: step,
                overlap: if strict_overlap {
                    OverlapPolicy::Interval
                } else {
                    OverlapPolicy::Endpoint
                },
            };

            let mut slots = day
                .compute(&request, &config)
                .context("Failed to compute available slots")?;
            if sort {
                sort_chronologically(&mut slots);
            }
            info!(slots = slots.len(), "slots available");

            let rendered = render(&slots, format)?;
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Durations => {
            for minutes in DURATION_OPTIONS {
                println!("{} min", minutes);
            }
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays clean for piping. Warnings only by default.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn render(slots: &[AvailableSlot], format: Format) -> Result<String> {
    match format {
        Format::Json => {
            let records: Vec<SlotRecord> = slots.iter().map(AvailableSlot::to_record).collect();
            let mut out = serde_json::to_string_pretty(&records)?;
            out.push('\n');
            Ok(out)
        }
        Format::Text => Ok(slots
            .iter()
            .map(|slot| format!("{} - {}\n", slot.start(), slot.end()))
            .collect()),
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
