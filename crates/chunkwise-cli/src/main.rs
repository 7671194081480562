use chunkwise::{
    ChunkwiseError, ConfigLoader, EngineConfig, chunk_len_for, detect_number_of_cores,
    human_readable_size, log_memory_stats, range_length,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "chunkwise", version, about = "Chunk sizing advisor")]
struct Cli {
    /// Engine config file (JSON or YAML)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Chunk size in bytes for an expected dataset size
    Advise(AdviseCmd),
    /// Items per chunk for an array of known length and item size
    ChunkLen(ChunkLenCmd),
    /// Length of a strided half-open range
    Range(RangeCmd),
    /// Memory usage, core count and configured threads
    Stats,
}

#[derive(Args, Debug)]
struct AdviseCmd {
    /// Expected total size in MB
    #[arg(long, allow_negative_numbers = true)]
    expected_mb: f64,
}

#[derive(Args, Debug)]
struct ChunkLenCmd {
    #[arg(long)]
    expected_len: u64,
    /// Bytes per item
    #[arg(long)]
    item_size: usize,
}

#[derive(Args, Debug)]
struct RangeCmd {
    #[arg(long, allow_negative_numbers = true)]
    start: i64,
    #[arg(long, allow_negative_numbers = true)]
    stop: i64,
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    step: i64,
}

fn main() {
    let started = Instant::now();
    chunkwise::telemetry::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli, started) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli, started: Instant) -> Result<(), ChunkwiseError> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::from_path(path)?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Commands::Advise(cmd) => {
            let bytes = config.chunk_bytes_for(cmd.expected_mb)?;
            println!("{bytes}\t{}", human_readable_size(bytes as u64));
        }
        Commands::ChunkLen(cmd) => {
            let items = chunk_len_for(cmd.expected_len, cmd.item_size)?;
            println!("{items}");
        }
        Commands::Range(cmd) => {
            println!("{}", range_length(cmd.start, cmd.stop, cmd.step)?);
        }
        Commands::Stats => {
            log_memory_stats("stats", started)?;
            println!("cores: {}", detect_number_of_cores());
            println!("nthreads: {}", config.nthreads);
        }
    }
    Ok(())
}
