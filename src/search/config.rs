//! Search configuration.

use crate::error::{SearchError, SearchResult};

/// Configuration shared by the goal-directed search algorithms.
///
/// # Examples
///
/// ```
/// use u_search::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_depth_limit(6)
///     .with_max_iterative_limit(12)
///     .with_max_iterations(10_000);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.depth_limit, 6);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Depth bound for depth-first search. The root sits at depth 1, so a
    /// limit of 1 only tests the start state.
    pub depth_limit: usize,

    /// Largest depth bound tried by iterative deepening.
    pub max_iterative_limit: usize,

    /// Hard budget on loop iterations (best-first dequeues or recursive
    /// calls). 0 = no limit.
    pub max_iterations: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_limit: 10,
            max_iterative_limit: 10,
            max_iterations: 0,
        }
    }
}

impl SearchConfig {
    pub fn with_depth_limit(mut self, limit: usize) -> Self {
        self.depth_limit = limit;
        self
    }

    pub fn with_max_iterative_limit(mut self, limit: usize) -> Self {
        self.max_iterative_limit = limit;
        self
    }

    /// Sets the iteration budget (0 disables it).
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Whether `iterations` has used up the budget.
    pub(crate) fn exhausted(&self, iterations: usize) -> bool {
        self.max_iterations > 0 && iterations >= self.max_iterations
    }

    /// Validates the configuration.
    pub fn validate(&self) -> SearchResult<()> {
        if self.depth_limit == 0 {
            return Err(SearchError::InvalidConfig(
                "depth_limit must be at least 1".into(),
            ));
        }
        if self.max_iterative_limit == 0 {
            return Err(SearchError::InvalidConfig(
                "max_iterative_limit must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.depth_limit, 10);
        assert_eq!(config.max_iterative_limit, 10);
        assert_eq!(config.max_iterations, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_depth_limit() {
        let config = SearchConfig::default().with_depth_limit(0);
        assert!(matches!(
            config.validate(),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_zero_iterative_limit() {
        let config = SearchConfig::default().with_max_iterative_limit(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_exhausted_only_with_budget() {
        let unlimited = SearchConfig::default();
        assert!(!unlimited.exhausted(usize::MAX));
        let capped = SearchConfig::default().with_max_iterations(5);
        assert!(!capped.exhausted(4));
        assert!(capped.exhausted(5));
    }
}
