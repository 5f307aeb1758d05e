//! Runs a YES → NOT cascade and compares the end state with the analytic
//! steady state.
//!
//! ```text
//! cargo run -p cellgate-examples --example cascade [path/to/config.toml]
//! ```

use cellgate_examples::{CascadeConfig, ConfigError, run_cascade};

const BUNDLED: &str = include_str!("../params/cascade.toml");

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(path) => CascadeConfig::load(path)?,
        None => CascadeConfig::from_toml(BUNDLED)?,
    };

    let state = run_cascade(&config)?;

    let input = config.simulation.input;
    let driver = config
        .driver
        .device()
        .steady_state(input)
        .map_err(|source| ConfigError::Parameters {
            device: "driver",
            source,
        })?;
    let inverter = config
        .inverter
        .device()
        .steady_state(driver.x)
        .map_err(|source| ConfigError::Parameters {
            device: "inverter",
            source,
        })?;

    println!("t = {:.3}", state.time);
    println!(
        "driver output    simulated {:>10.5}   steady {:>10.5}",
        state.driver[0], driver.x
    );
    println!(
        "inverter output  simulated {:>10.5}   steady {:>10.5}",
        state.inverter[1], inverter.x
    );

    Ok(())
}
