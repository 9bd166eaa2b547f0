use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use strix::{Fixture, OperationRunner};

#[derive(Parser)]
#[command(
    name = "strix",
    about = "Container operation demos over a composite-keyed owl registry",
    version
)]
struct Cli {
    /// Newline-separated integer snapshot for the numeric demos
    /// (defaults to the built-in sample data)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// JSON fixture overriding the built-in registry dataset
    #[arg(long)]
    fixture: Option<PathBuf>,

    #[command(subcommand)]
    demo: Option<Demo>,
}

#[derive(Subcommand)]
enum Demo {
    /// Keyed operations over the hash and insertion-ordered registries
    Map,
    /// Linear vs binary search over the numeric sequence
    Sequence,
    /// Min-priority queue operations (peek / pop / peek)
    Queue,
    /// Duplicate-absorbing set operations and coverage analysis
    Set,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> std::io::Result<()> {
    let fixture = match &cli.fixture {
        Some(path) => Fixture::from_json_file(path)?,
        None => Fixture::sample(),
    };

    let mut runner = OperationRunner::new(fixture);
    if let Some(path) = cli.data {
        runner = runner.with_data_path(path);
    }

    match cli.demo {
        None => runner.run_all(),
        Some(Demo::Map) => {
            runner.run_map_demo();
            Ok(())
        }
        Some(Demo::Sequence) => runner.run_sequence_demo(),
        Some(Demo::Queue) => runner.run_queue_demo(),
        Some(Demo::Set) => runner.run_set_demo(),
    }
}
