//! Annealing execution loop.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::AnnealingConfig;
use super::types::AnnealingResult;
use crate::error::SearchResult;
use crate::problem::LocalProblem;

/// Executes simulated annealing on a [`LocalProblem`].
pub struct AnnealingRunner;

impl AnnealingRunner {
    /// Runs annealing with an RNG seeded from `config.seed`, or from OS
    /// entropy when no seed is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_search::problem::{GridPoint, PeakProblem};
    /// use u_search::sa::{AnnealingConfig, AnnealingRunner};
    ///
    /// let area = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
    /// let problem = PeakProblem::new(area, GridPoint::new(0, 0))?;
    /// let config = AnnealingConfig::default().with_lam(0.05).with_seed(1);
    /// let result = AnnealingRunner::run(&problem, &config)?;
    /// assert_eq!(result.state, GridPoint::new(1, 1));
    /// # Ok::<(), u_search::SearchError>(())
    /// ```
    pub fn run<P: LocalProblem>(
        problem: &P,
        config: &AnnealingConfig,
    ) -> SearchResult<AnnealingResult<P::State>> {
        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs annealing drawing every random choice from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<P: LocalProblem, R: Rng>(
        problem: &P,
        config: &AnnealingConfig,
        rng: &mut R,
    ) -> SearchResult<AnnealingResult<P::State>> {
        config.validate()?;
        let schedule = config.schedule();

        let mut current = problem.initial().clone();
        let mut current_value = problem.value(&current);
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut steps = 0usize;

        // The schedule is first sampled at t = 1.
        let final_temperature = loop {
            let temperature = schedule.temperature(steps + 1);
            if temperature == 0.0 {
                break temperature;
            }
            let actions = problem.actions(&current);
            if actions.is_empty() {
                debug!("no legal move from {current:?}");
                break temperature;
            }

            let action = &actions[rng.random_range(0..actions.len())];
            let next = problem.result(&current, action);
            let next_value = problem.value(&next);
            let delta = next_value - current_value;

            // Metropolis criterion for maximisation
            let accept = delta > 0.0 || rng.random::<f64>() < (delta / temperature).exp();
            if accept {
                if delta > 0.0 {
                    improving_moves += 1;
                }
                debug!(
                    "step {}: move to {next:?} (value {next_value}, T {temperature})",
                    steps + 1
                );
                current = next;
                current_value = next_value;
                accepted_moves += 1;
            }
            steps += 1;
        };

        info!(
            "annealing stopped at {current:?} with value {current_value} after {steps} steps ({accepted_moves} accepted)"
        );
        Ok(AnnealingResult {
            state: current,
            value: current_value,
            iterations: steps,
            accepted_moves,
            improving_moves,
            final_temperature,
        })
    }
}
