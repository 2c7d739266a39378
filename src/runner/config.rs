//! Configuration for bounded strategy runs.

use std::time::Duration;

/// Wall-clock budget used when none is given: 15 minutes.
pub const DEFAULT_BUDGET: Duration = Duration::from_secs(900);

/// How long a timed-out worker gets to notice cancellation before it is detached.
pub const DEFAULT_CANCEL_GRACE: Duration = Duration::from_millis(250);

/// Configuration for one bounded strategy execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Maximum wall-clock time a strategy may run before it is reported as timed out.
    pub budget: Duration,
    /// Time allowed after cancellation for the worker to stop and be joined.
    pub cancel_grace: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            cancel_grace: DEFAULT_CANCEL_GRACE,
        }
    }
}

impl RunConfig {
    /// Set the per-strategy time budget.
    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget = budget;
        self
    }

    /// Set the per-strategy time budget in whole seconds.
    pub fn with_budget_secs(self, secs: u64) -> Self {
        self.with_budget(Duration::from_secs(secs))
    }

    /// Set the cancellation grace period.
    pub fn with_cancel_grace(mut self, grace: Duration) -> Self {
        self.cancel_grace = grace;
        self
    }

    /// Upper bound on how long one `execute` call can block its caller
    /// when the strategy honours cancellation.
    #[cfg(test)]
    pub fn max_wait(&self) -> Duration {
        self.budget + self.cancel_grace
    }
}
