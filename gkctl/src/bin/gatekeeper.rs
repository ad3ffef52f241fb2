use chrono::{DateTime, Utc};
use clap::{
    Parser,
    Subcommand,
};
use gkcore::{
    publish::Action,
    serial::SerialRecord,
    viewer::Viewer,
};
use gkctl::{
    listing::{
        Columns,
        Listing,
    },
    records,
};
use gkpolicy::{
    Builder,
    Gatekeeper,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// JSON file holding an array of records
    #[clap(long, short = 'r', value_name = "FILE")]
    records: PathBuf,
    /// Evaluate at this RFC 3339 instant instead of the current time
    #[clap(long, value_name = "GATEKEEPER_NOW", env = "GATEKEEPER_NOW")]
    now: Option<DateTime<Utc>>,
    /// JSON file holding the gatekeeper configuration
    #[clap(long, value_name = "GATEKEEPER_CONFIG", env = "GATEKEEPER_CONFIG")]
    config: Option<PathBuf>,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Reports whether each record is visible to the viewer
    Visible {
        #[arg(long)]
        privileged: bool,
        #[arg(long)]
        authenticated: bool,
    },
    /// Prints the record that should currently be live
    Select {
        /// Look up this record directly; only honoured for privileged requesters
        #[arg(long)]
        id: Option<i64>,
        #[arg(long)]
        privileged: bool,
    },
    /// Lists the records along with their publication phase
    Status {
        /// Show the columns for records where only one may be live
        #[arg(long)]
        serial: bool,
    },
    /// Applies a publish action to a record
    #[command(arg_required_else_help = true)]
    Apply {
        id: i64,
        #[arg(value_enum)]
        action: Action,
        /// Write the updated records back to the records file
        #[arg(long)]
        in_place: bool,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    stderrlog::new()
        .module(module_path!())
        .module("gkctl")
        .module("gkcore")
        .module("gkpolicy")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let now = args.now.unwrap_or_else(Utc::now);
    log::debug!("evaluating at {now}");
    let mut builder = Builder::new();
    if let Some(path) = &args.config {
        builder = builder.config(records::load_config(path)?);
    }
    let gatekeeper = builder.build();
    let mut records = records::load(&args.records)?;

    match args.command {
        Commands::Visible { privileged, authenticated } => {
            let viewer = Viewer { privileged, authenticated };
            parse_visible(&gatekeeper, &records, &viewer, now);
        }
        Commands::Select { id, privileged } => {
            let record = gatekeeper.select_live_or_default(&records, id, privileged, now)?;
            println!("{}", serde_json::to_string_pretty(record)?);
        }
        Commands::Status { serial } => {
            let columns = if serial {
                Columns::Serial
            } else {
                Columns::Basic
            };
            print!("{}", Listing::new(&gatekeeper, &records, now).columns(columns));
        }
        Commands::Apply { id, action, in_place } => {
            let record = records::apply(&mut records, id, action, now)?;
            eprintln!("{}: {}; record {id} is now {}", action, action.description(), record.state.phase(now));
            if in_place {
                records::save(&args.records, &records)?;
            } else {
                println!("{}", serde_json::to_string_pretty(&records)?);
            }
        }
    }

    Ok(())
}

fn parse_visible(
    gatekeeper: &Gatekeeper,
    records: &[SerialRecord],
    viewer: &Viewer,
    now: DateTime<Utc>,
) {
    for record in records.iter() {
        let visible = if gatekeeper.is_visible(Some(viewer), Some(record), now) {
            "visible"
        } else {
            "not visible"
        };
        println!("{}\t{visible}", record.id);
    }
}
