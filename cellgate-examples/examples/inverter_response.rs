//! Prints the steady-state response curve of the bundled NOT cell and the
//! input level at which it switches.

use cellgate_devices::response::{NotTransfer, switching_threshold};
use cellgate_examples::CascadeConfig;
use cellgate_solve::equation::bisection::Config;

const BUNDLED: &str = include_str!("../params/cascade.toml");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = CascadeConfig::from_toml(BUNDLED)?;
    let params = config.inverter.device();

    println!("{:>12}  {:>12}  {:>12}", "input", "repressor", "output");
    for exponent in -3..=3 {
        let input = 10f64.powi(exponent);
        let steady = params.steady_state(input)?;
        println!("{:>12.4e}  {:>12.5}  {:>12.5}", input, steady.l, steady.x);
    }

    let threshold = switching_threshold(&NotTransfer { params }, [0.0, 1e3], &Config::default())?;
    println!(
        "\nswitches at input {:.5} (output {:.5}, swing {:.5} → {:.5})",
        threshold.input, threshold.output, threshold.output_at_low, threshold.output_at_high
    );

    Ok(())
}
