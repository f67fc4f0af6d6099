use clap::Parser;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

use fewbody_dmc::{read_config, run_dmc, DmcError};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "config.yml")]
    config: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let level_filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(level_filter)
        .with(stderr_layer)
        .init();
}

fn main() -> Result<(), DmcError> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = read_config(&args.config)?;
    let potential = config.potential()?;
    let params = config.dmc;

    let results = run_dmc(potential, params, &config.run)?;

    // Print results
    println!("DMC Simulation Results");
    println!("----------------------------------------");
    println!("Potential: {:?}", potential);
    println!("Number of particles: {}", params.n_particles);
    println!("Time step: {}", params.dt);
    println!("Number of steps: {}", config.run.n_steps);
    println!("Final population: {}", results.final_population);
    println!(
        "Ground state energy (last {} steps): {:.6} ± {:.6}",
        results.window_samples, results.energy, results.std_dev
    );
    println!("Standard error: {:.6}", results.error);
    println!("Autocorrelation time: {:.2} steps", results.autocorrelation_time);

    Ok(())
}
