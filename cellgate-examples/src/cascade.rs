//! A YES cell driving a NOT cell, stepped with forward Euler.
//!
//! The combined state is the two device state vectors side by side.
//! Each model reports zero for its external input slot, so the driver owns
//! those slots: it holds the YES input at the configured stimulus and copies
//! the YES output into the NOT input before every evaluation.

use cellgate_core::OdeModel;
use cellgate_devices::{NotModel, YesModel};
use tracing::{debug, info};

use crate::config::{CascadeConfig, ConfigError};

/// The combined state of a cascade at one point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CascadeState {
    pub time: f64,
    /// YES cell state `[a, b]`.
    pub driver: [f64; 2],
    /// NOT cell state `[l_a, a, b]`.
    pub inverter: [f64; 3],
}

impl CascadeState {
    /// All species at zero, with the stimulus applied and wired through.
    #[must_use]
    pub fn initial(input: f64) -> Self {
        let mut state = Self {
            time: 0.0,
            driver: [0.0, 0.0],
            inverter: [0.0, 0.0, 0.0],
        };
        state.connect(input);
        state
    }

    /// Writes the external slots: stimulus into the driver, driver output
    /// into the inverter.
    fn connect(&mut self, input: f64) {
        self.driver[1] = input;
        self.inverter[2] = self.driver[0];
    }
}

/// Advances `state` by one forward Euler step of size `dt`.
///
/// External slots are left untouched because the model reports zero for them.
fn euler_step<M, const N: usize>(
    model: &M,
    time: f64,
    state: &mut [f64; N],
    params: &M::Parameters,
    dt: f64,
) where
    M: OdeModel<N>,
{
    let derivative = model.derivative(time, state, params);
    for (value, rate) in state.iter_mut().zip(derivative) {
        *value += rate * dt;
    }
}

/// Simulates the cascade from rest until `t_end`.
///
/// Returns the state at the final step.
///
/// # Errors
///
/// Returns [`ConfigError::Simulation`] if the simulation settings are not
/// usable, such as a step that is zero or not finite.
pub fn run_cascade(config: &CascadeConfig) -> Result<CascadeState, ConfigError> {
    let sim = config.simulation;
    sim.validate()?;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = (sim.t_end / sim.dt).round() as usize;

    info!(steps, dt = sim.dt, input = sim.input, "starting cascade");

    let mut state = CascadeState::initial(sim.input);
    for step in 1..=steps {
        euler_step(&YesModel, state.time, &mut state.driver, &config.driver, sim.dt);
        euler_step(
            &NotModel,
            state.time,
            &mut state.inverter,
            &config.inverter,
            sim.dt,
        );

        #[allow(clippy::cast_precision_loss)]
        let time = step as f64 * sim.dt;
        state.time = time;
        state.connect(sim.input);

        if sim.log_every > 0 && step % sim.log_every == 0 {
            debug!(
                time,
                driver = state.driver[0],
                intermediate = state.inverter[0],
                inverter = state.inverter[1],
                "cascade progress"
            );
        }
    }

    info!(
        time = state.time,
        driver = state.driver[0],
        inverter = state.inverter[1],
        "cascade finished"
    );
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::config::SimulationConfig;

    const BUNDLED: &str = include_str!("../params/cascade.toml");

    fn config(input: f64) -> CascadeConfig {
        let mut config = CascadeConfig::from_toml(BUNDLED).expect("bundled config parses");
        config.simulation = SimulationConfig {
            t_end: 30.0,
            dt: 0.001,
            input,
            log_every: 0,
        };
        config
    }

    #[test]
    fn initial_state_is_wired() {
        let state = CascadeState::initial(3.0);
        assert_eq!(state.driver, [0.0, 3.0]);
        assert_eq!(state.inverter, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn stimulus_is_never_integrated() {
        let config = config(2.0);
        let state = run_cascade(&CascadeConfig {
            simulation: SimulationConfig {
                t_end: 1.0,
                ..config.simulation
            },
            ..config
        })
        .expect("settings are valid");

        assert_eq!(state.driver[1], 2.0);
        assert_eq!(state.inverter[2], state.driver[0]);
    }

    #[test]
    fn high_input_drives_inverter_low() {
        let config = config(2.0);
        let state = run_cascade(&config).expect("settings are valid");

        let driver = config
            .driver
            .device()
            .steady_state(2.0)
            .expect("driver decays");
        let inverter = config
            .inverter
            .device()
            .steady_state(driver.x)
            .expect("inverter decays");

        assert_relative_eq!(state.driver[0], driver.x, max_relative = 1e-3);
        assert_relative_eq!(state.inverter[0], inverter.l, max_relative = 1e-3);
        assert_relative_eq!(state.inverter[1], inverter.x, max_relative = 1e-2);
        assert!(state.inverter[1] < 1.0);
    }

    #[test]
    fn no_input_leaves_inverter_high() {
        let config = config(0.0);
        let state = run_cascade(&config).expect("settings are valid");

        assert_relative_eq!(state.driver[0], 0.0);
        // eta / (delta + rho) with a repressor that never appears.
        assert_relative_eq!(state.inverter[1], 10.0, max_relative = 1e-6);
    }

    #[test]
    fn unusable_step_is_rejected() {
        let config = config(1.0);
        for dt in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let result = run_cascade(&CascadeConfig {
                simulation: SimulationConfig {
                    dt,
                    ..config.simulation
                },
                ..config
            });
            assert!(matches!(result, Err(ConfigError::Simulation { .. })));
        }
    }
}
