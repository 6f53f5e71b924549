use std::fs;
use std::fs::File;
use std::time::Instant;
use clap::Parser;
use log::LevelFilter;
use memhier::config::HierarchyConfig;
use memhier::hierarchy::Level;
use memhier::io::get_reader;
use memhier::simulator::Simulator;

#[cfg(debug_assertions)]
const DEBUG_DEFAULT: bool = true;

#[cfg(not(debug_assertions))]
const DEBUG_DEFAULT: bool = false;

#[derive(Parser, Debug)]
#[command(about = String::from("Timing simulator for split L1 caches in front of a shared L2"))]
struct Args {
    /// JSON file describing the hierarchy
    config: String,
    /// Trace of `<I|L|S> <hex address>` records
    trace: String,

    #[arg(short, long)]
    performance: bool,

    #[arg(short, long, default_value_t = DEBUG_DEFAULT)]
    debug: bool,
}

fn main() -> Result<(), String> {
    let start = Instant::now();
    let args = Args::parse();
    let default_level = if args.debug { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let config_source = fs::read_to_string(&args.config).map_err(|e| format!("Couldn't open the config file at path {}: {e}", args.config))?;
    let config = HierarchyConfig::from_json(&config_source).map_err(|e| e.to_string())?;
    let mut simulator = Simulator::new(config).map_err(|e| e.to_string())?;
    let trace_file = File::open(&args.trace).map_err(|e| format!("Couldn't open the trace file at path {}: {e}", args.trace))?;
    let trace_reader = get_reader(trace_file).map_err(|e| format!("Couldn't read the trace file: {e}"))?;
    let result = simulator.simulate(trace_reader).map_err(|e| e.to_string())?;
    println!("{}", serde_json::to_string_pretty(&result).map_err(|e| format!("Couldn't serialise the output {e}"))?);
    if args.performance {
        let end = Instant::now();
        let simulation_time = simulator.get_execution_time();
        let total_time = end - start;
        println!("Simulation time: {}s", simulation_time.as_nanos() as f64 / 1e9);
        println!("Total execution time (includes initial parsing, configuration, and output): {}s", total_time.as_nanos() as f64 / 1e9)
    }
    if args.debug {
        #[cfg(debug_assertions)]
        println!("Running the debug binary, debug mode is enabled by default. If benchmarking, do not use this binary, re-compile with the --release argument when using cargo run");
        let hierarchy = simulator.hierarchy();
        println!("Parsed input configuration: {:?}", hierarchy.config());
        let vacant_lines = hierarchy.vacant_line_counts();
        let formatted = Level::ALL
            .iter()
            .zip(vacant_lines.iter())
            .map(|(level, count)| format!("{level}: {count}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!("Vacant cache lines by level: ({formatted})");
        println!("Total vacant cache lines: {}", vacant_lines.iter().sum::<usize>())
    }
    Ok(())
}
