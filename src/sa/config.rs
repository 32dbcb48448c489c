//! Annealing configuration.

use super::types::ExpSchedule;
use crate::error::{SearchError, SearchResult};

/// Configuration for simulated annealing.
///
/// # Examples
///
/// ```
/// use u_search::sa::AnnealingConfig;
///
/// let config = AnnealingConfig::default()
///     .with_k(10.0)
///     .with_lam(0.01)
///     .with_limit(500)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.schedule().temperature(500), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingConfig {
    /// Starting temperature.
    pub k: f64,

    /// Decay rate of the exponential schedule.
    pub lam: f64,

    /// Step at which the temperature drops to zero and the run stops.
    pub limit: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            k: 20.0,
            lam: 0.005,
            limit: 1000,
            seed: None,
        }
    }
}

impl AnnealingConfig {
    pub fn with_k(mut self, k: f64) -> Self {
        self.k = k;
        self
    }

    pub fn with_lam(mut self, lam: f64) -> Self {
        self.lam = lam;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The temperature schedule these parameters describe.
    pub fn schedule(&self) -> ExpSchedule {
        ExpSchedule::new(self.k, self.lam, self.limit)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> SearchResult<()> {
        if !self.k.is_finite() || self.k <= 0.0 {
            return Err(SearchError::InvalidConfig(format!(
                "k must be positive, got {}",
                self.k
            )));
        }
        if !self.lam.is_finite() || self.lam <= 0.0 {
            return Err(SearchError::InvalidConfig(format!(
                "lam must be positive, got {}",
                self.lam
            )));
        }
        if self.limit == 0 {
            return Err(SearchError::InvalidConfig("limit must be at least 1".into()));
        }
        Ok(())
    }
}
