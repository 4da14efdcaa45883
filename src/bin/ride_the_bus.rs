use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use ride_the_bus::strategy::StrategyKind;
use ride_the_bus::trials::{Result, SummaryStats, TrialConfig, TrialRunner, summarize};

#[derive(Parser, Debug)]
#[command(
    name = "ride-the-bus",
    about = "Monte Carlo simulation of the ride the bus card game",
    long_about = "Play batches of ride the bus games and report how many rounds it takes to\n\
                  clear every slot in a single pass. Give several slot counts to compare them\n\
                  in one run. The CSV report goes to stdout, everything else to stderr."
)]
struct Args {
    /// Slot counts to simulate, one batch per value
    #[arg(value_name = "SLOTS", default_value = "1")]
    slots: Vec<usize>,

    /// Games to play per batch
    #[arg(short, long, default_value_t = 10_000)]
    iterations: usize,

    /// Guessing strategy the games play with
    #[arg(short = 'p', long, value_enum, default_value_t = StrategyKind::Blind)]
    strategy: StrategyKind,

    /// How many round thresholds the win odds columns cover
    #[arg(long, default_value_t = 50)]
    odds: u32,

    /// Score drawn Aces by rank instead of counting them as losses
    #[arg(short = 'a', long)]
    no_ace_rule: bool,

    /// Skip the CSV report on stdout
    #[arg(short = 'q', long)]
    no_csv: bool,

    /// Print the summaries as JSON on stdout instead of CSV
    #[arg(long)]
    json: bool,

    /// Base seed for the whole run; random when not set
    #[arg(long)]
    seed: Option<u64>,

    /// Increase logging verbosity (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Priority goes to `RUST_LOG`; otherwise the verbosity flags pick the
/// level. Logs go to stderr so that stdout stays a clean report stream.
fn init_tracing(args: &Args) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        EnvFilter::new(format!("{level},ride_the_bus={level}"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args);
    run(args)
}

fn run(args: Args) -> Result<()> {
    // CSV rows stream out as each batch finishes; JSON needs them all.
    let print_csv = !args.no_csv && !args.json;
    if print_csv {
        println!("{}", SummaryStats::csv_header(args.odds));
    }

    let mut all_stats = Vec::with_capacity(args.slots.len());
    for &num_slots in &args.slots {
        let config = TrialConfig {
            num_slots,
            iterations: args.iterations,
            strategy: args.strategy,
            ace_rule: !args.no_ace_rule,
            seed: args.seed,
        };
        let results = TrialRunner::new(config).run_parallel()?;
        let stats = summarize(&config, &results, args.odds);
        for line in stats.summary_lines() {
            eprintln!("{line}");
        }
        if print_csv {
            println!("{}", stats.csv_row());
        }
        all_stats.push(stats);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&all_stats)?);
    }

    Ok(())
}
