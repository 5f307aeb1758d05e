use std::path::{Path, PathBuf};

use cellgate_devices::{NotModelParams, ParameterError, YesModelParams};
use serde::Deserialize;
use thiserror::Error;

/// Settings for a YES cell driving a NOT cell.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CascadeConfig {
    pub simulation: SimulationConfig,
    /// The YES cell that receives the external input.
    pub driver: YesModelParams,
    /// The NOT cell whose input is the driver's output.
    pub inverter: NotModelParams,
}

/// Time stepping and stimulus for a cascade run.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// End of the simulated interval; the run starts at zero.
    pub t_end: f64,
    /// Fixed step size.
    pub dt: f64,
    /// Constant input concentration applied to the driver.
    pub input: f64,
    /// Emit a progress event every this many steps; zero disables them.
    #[serde(default)]
    pub log_every: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration")]
    Parse(#[from] toml::de::Error),

    #[error("invalid {device} parameters")]
    Parameters {
        device: &'static str,
        #[source]
        source: ParameterError,
    },

    #[error("invalid simulation settings: {reason}")]
    Simulation { reason: &'static str },
}

impl CascadeConfig {
    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the text is not valid TOML for this
    /// layout or if any value fails validation.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or its contents
    /// are rejected by [`from_toml`](Self::from_toml).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Checks device parameters and simulation settings.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.driver
            .validate()
            .map_err(|source| ConfigError::Parameters {
                device: "driver",
                source,
            })?;
        self.inverter
            .validate()
            .map_err(|source| ConfigError::Parameters {
                device: "inverter",
                source,
            })?;
        self.simulation.validate()
    }
}

impl SimulationConfig {
    /// Checks that the interval, step, and input are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Simulation`] describing the first problem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let reason = if !self.dt.is_finite() || self.dt <= 0.0 {
            "dt must be finite and positive"
        } else if !self.t_end.is_finite() || self.t_end < 0.0 {
            "t_end must be finite and non-negative"
        } else if !self.input.is_finite() || self.input < 0.0 {
            "input must be finite and non-negative"
        } else {
            return Ok(());
        };
        Err(ConfigError::Simulation { reason })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const BUNDLED: &str = include_str!("../params/cascade.toml");

    #[test]
    fn bundled_config_is_valid() {
        let config = CascadeConfig::from_toml(BUNDLED).expect("bundled config parses");

        assert_relative_eq!(config.simulation.dt, 0.001);
        assert_relative_eq!(config.driver.gamma_a, 10.0);
        assert_relative_eq!(config.inverter.theta_l_a, 0.2);
        assert_eq!(config.simulation.log_every, 2000);
    }

    #[test]
    fn missing_parameter_is_a_parse_error() {
        let text = BUNDLED.replace("eta_a = 10.0", "");
        let err = CascadeConfig::from_toml(&text).expect_err("eta_a is required");

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn negative_rate_names_the_device() {
        let text = BUNDLED.replace("omega_a = 0.5", "omega_a = -0.5");
        let err = CascadeConfig::from_toml(&text).expect_err("negative rate");

        assert!(matches!(
            err,
            ConfigError::Parameters {
                device: "inverter",
                source: ParameterError::Negative { name: "omega", .. },
            }
        ));
    }

    #[test]
    fn zero_step_is_rejected() {
        let text = BUNDLED.replace("dt = 0.001", "dt = 0.0");
        let err = CascadeConfig::from_toml(&text).expect_err("zero step");

        assert!(matches!(err, ConfigError::Simulation { .. }));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = CascadeConfig::load("does/not/exist.toml").expect_err("no such file");
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
