//! Rule 30 CLI - Generate pseudo-random values from the command line.

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;

use rule30_prng::{
    compute::{AutomatonState, SampleStats},
    render::{AnsiTerminal, Visualizer},
    schema::{GeneratorConfig, Seed},
};

/// Generate pseudo-random numbers with a Rule 30 cellular automaton.
#[derive(Parser)]
#[command(name = "rule30", version, about)]
struct Cli {
    /// Seed value (0 or omitted derives one from the current time).
    #[arg(short, long)]
    seed: Option<u64>,

    /// Automaton width in columns.
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    size: Option<i64>,

    /// Bit width of each generated value (0-64).
    #[arg(short, long, allow_negative_numbers = true)]
    bits: Option<i32>,

    /// Number of values to generate.
    #[arg(short, long)]
    count: Option<usize>,

    /// JSON configuration file; other flags override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print an example configuration and exit.
    #[arg(long)]
    print_config: bool,

    /// Print statistics over the generated values as JSON.
    #[arg(long)]
    stats: bool,

    /// Animate the automaton instead of printing values.
    #[arg(long)]
    visualize: bool,

    /// Delay between animation frames in milliseconds.
    #[arg(long, default_value_t = 80)]
    delay_ms: u64,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if cli.print_config {
        print_example_config();
        return;
    }

    let config = resolve_config(&cli);
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let seed = config.seed.resolve();
    log::info!(
        "Seed {} ({:?}), size {}, {} x {}-bit values",
        seed,
        config.seed,
        config.size,
        config.count,
        config.bits
    );

    let mut state = AutomatonState::initialize(seed, config.size).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    if cli.visualize {
        let visualizer = Visualizer {
            delay: Duration::from_millis(cli.delay_ms),
            ..Visualizer::new((seed % config.size as u64) as usize)
        };
        let mut terminal = AnsiTerminal::stdout();
        if let Err(e) = visualizer.animate(&mut state, &mut terminal) {
            eprintln!("Error writing to terminal: {}", e);
            process::exit(1);
        }
        state.release();
        return;
    }

    let values: Vec<u64> = (0..config.count)
        .map(|_| state.generate(config.bits))
        .collect();
    state.release();

    if cli.stats {
        let stats = SampleStats::from_samples(&values, config.bits as u32);
        match serde_json::to_string_pretty(&stats) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing statistics: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    println!("Seed: {}", seed);
    let hex_digits = (config.bits as usize).div_ceil(4);
    for value in values {
        println!("{} (0x{:0width$X})", value, value, width = hex_digits);
    }
}

/// Load the configuration file if given, then apply command line overrides.
fn resolve_config(cli: &Cli) -> GeneratorConfig {
    let config = match &cli.config {
        Some(path) => GeneratorConfig::from_json_file(path).unwrap_or_else(|e| {
            eprintln!("Error loading {}: {}", path.display(), e);
            process::exit(1);
        }),
        None => GeneratorConfig::default(),
    };

    config.with_overrides(cli.seed, cli.size, cli.bits, cli.count)
}

fn print_example_config() {
    let config = GeneratorConfig {
        seed: Seed::Fixed { value: 777 },
        count: 5,
        ..GeneratorConfig::default()
    };

    println!("Example configuration (rule30.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing configuration: {}", e),
    }
}
