use thiserror::Error;

/// Configuration for a privacy-budget sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    trials: usize,
    sensitivity: f64,
}

/// Errors that can occur when validating a sweep config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("trials must be at least one")]
    ZeroTrials,

    #[error("sensitivity must be finite and positive, got {value}")]
    Sensitivity { value: f64 },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trials: 1000,
            sensitivity: 1.0,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if `trials` is zero or `sensitivity` is not finite and
    /// positive.
    pub fn new(trials: usize, sensitivity: f64) -> Result<Self, ConfigError> {
        if trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        if !sensitivity.is_finite() || sensitivity <= 0.0 {
            return Err(ConfigError::Sensitivity { value: sensitivity });
        }

        Ok(Self {
            trials,
            sensitivity,
        })
    }

    /// Returns the number of neighbour releases per epsilon.
    #[must_use]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Returns the sensitivity the mechanism is calibrated to.
    #[must_use]
    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_parameters() {
        assert!(Config::new(10, 2.0).is_ok());
        assert_eq!(Config::new(0, 1.0), Err(ConfigError::ZeroTrials));
        assert_eq!(
            Config::new(10, 0.0),
            Err(ConfigError::Sensitivity { value: 0.0 })
        );
        assert!(matches!(
            Config::new(10, f64::NAN),
            Err(ConfigError::Sensitivity { .. })
        ));
    }
}
