//! Temperature schedule and annealing result types.

/// Exponentially decaying temperature with a hard cutoff.
///
/// `T(t) = k * exp(-lam * t)` for `t < limit`, and `0` from `limit` on.
/// The annealing runner samples it from `t = 1`, so a run takes at most
/// `limit - 1` steps.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpSchedule {
    pub k: f64,
    pub lam: f64,
    pub limit: usize,
}

impl ExpSchedule {
    pub fn new(k: f64, lam: f64, limit: usize) -> Self {
        Self { k, lam, limit }
    }

    /// Temperature at step `t`.
    pub fn temperature(&self, t: usize) -> f64 {
        if t < self.limit {
            self.k * (-self.lam * t as f64).exp()
        } else {
            0.0
        }
    }
}

/// Result of an annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingResult<S> {
    /// State the walk ended on.
    pub state: S,

    /// Objective value of `state`.
    pub value: f64,

    /// Steps taken before the temperature hit zero or no move was legal.
    pub iterations: usize,

    /// Moves accepted, improving or not.
    pub accepted_moves: usize,

    /// Moves with a strictly higher value.
    pub improving_moves: usize,

    /// Temperature at the step that ended the run.
    pub final_temperature: f64,
}
