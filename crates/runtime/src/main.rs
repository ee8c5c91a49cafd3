//! Headless simulator entry point.

use anyhow::Result;
use barbarian_runtime::{SimConfig, Simulation, WanderProvider};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = SimConfig::from_env();
    let _guard = setup_logging(&config)?;

    let rules = config.rules()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!("Starting simulation: seed={}, ticks={}", seed, config.ticks);

    let mut simulation = Simulation::builder()
        .config(rules)
        .sim_config(&config)
        .seed(seed)
        .player_provider(WanderProvider::new(seed))
        .build()?;
    let ran = simulation.run(config.ticks)?;

    for message in simulation.messages().iter() {
        println!("{}", message.text);
    }
    let state = simulation.state();
    println!(
        "-- {} ticks, floor {}, player {}",
        ran,
        state.world.current_floor,
        if simulation.player_alive() { "alive" } else { "dead" }
    );
    Ok(())
}

/// Setup logging to both stderr and a file in the log directory.
fn setup_logging(config: &SimConfig) -> Result<WorkerGuard> {
    let log_dir = config.resolved_log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "barbarian-sim.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    tracing::info!("Log file: {}/barbarian-sim.log", log_dir.display());
    Ok(guard)
}
