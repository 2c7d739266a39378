//! Timeout-bounded strategy execution.
//!
//! A strategy call races a timer. Both run on their own thread and compete for
//! one [`CompletionSlot`]; the caller blocks on the slot and gets whichever
//! value landed first:
//! - the worker stores `Completed` or `Failed` (errors and panics)
//! - the timer stores `TimedOut` once the budget elapses, then cancels the
//!   strategy through its [`SearchContext`]
//!
//! After a timeout the worker gets `cancel_grace` to stop before it is
//! detached, so a call never blocks much longer than its budget.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{RecvTimeoutError, bounded};
use log::{debug, warn};

use crate::error::StrategyError;
use crate::puzzle::EightPuzzle;
use crate::runner::config::RunConfig;
use crate::runner::slot::CompletionSlot;
use crate::search::SearchContext;

/// Terminal classification of one bounded execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The strategy returned within the budget.
    Completed(T),
    /// The budget elapsed first.
    TimedOut,
    /// The strategy returned an error or panicked.
    Failed(String),
}

/// Outcome plus the instrumentation gathered while producing it.
#[derive(Debug)]
pub struct Execution<T> {
    pub outcome: Outcome<T>,
    /// Nodes counted by the strategy up to the moment the outcome was decided.
    pub nodes: u64,
    /// Time the caller spent waiting for the outcome.
    pub elapsed: Duration,
}

/// Run `strategy_fn` on `puzzle`, bounded by `config.budget`.
pub fn execute<T, F>(strategy_fn: F, puzzle: EightPuzzle, config: &RunConfig) -> Execution<T>
where
    T: Send + 'static,
    F: FnOnce(&EightPuzzle, &SearchContext) -> Result<T, StrategyError> + Send + 'static,
{
    let start_time = Instant::now();
    let ctx = SearchContext::new();
    let slot = Arc::new(CompletionSlot::new());
    // Dropped by the worker when it exits, never sent on
    let (done_tx, done_rx) = bounded::<()>(1);

    let worker = {
        let ctx = ctx.clone();
        let slot = Arc::clone(&slot);
        thread::spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| strategy_fn(&puzzle, &ctx)));
            let outcome = match result {
                Ok(Ok(value)) => Outcome::Completed(value),
                Ok(Err(e)) => Outcome::Failed(e.to_string()),
                Err(payload) => Outcome::Failed(panic_message(payload.as_ref())),
            };
            if !slot.try_fill(outcome) {
                debug!("worker finished after the timer claimed the slot");
            }
            drop(done_tx);
        })
    };

    let timer = {
        let slot = Arc::clone(&slot);
        let cancel = ctx.cancel_token();
        let done_rx = done_rx.clone();
        let budget = config.budget;
        thread::spawn(move || {
            if let Err(RecvTimeoutError::Timeout) = done_rx.recv_timeout(budget)
                && slot.try_fill(Outcome::TimedOut)
            {
                cancel.cancel();
            }
        })
    };

    let outcome = slot
        .wait()
        .unwrap_or_else(|| Outcome::Failed("completion slot closed".to_string()));
    let elapsed = start_time.elapsed();
    let nodes = ctx.nodes_generated();

    if let Outcome::TimedOut = outcome {
        ctx.cancel_token().cancel();
        match done_rx.recv_timeout(config.cancel_grace) {
            Err(RecvTimeoutError::Timeout) => {
                warn!(
                    "strategy ignored cancellation for {:?}; detaching worker thread",
                    config.cancel_grace
                );
                drop(worker);
            }
            _ => join_quietly(worker),
        }
    } else {
        join_quietly(worker);
    }
    join_quietly(timer);

    debug!("execution decided after {:?} ({} nodes)", elapsed, nodes);
    Execution {
        outcome,
        nodes,
        elapsed,
    }
}

fn join_quietly(handle: thread::JoinHandle<()>) {
    if handle.join().is_err() {
        warn!("executor thread panicked outside the strategy call");
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("strategy panicked: {}", msg)
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("strategy panicked: {}", msg)
    } else {
        "strategy panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{SearchStrategy, Strategy};

    fn example() -> EightPuzzle {
        EightPuzzle::new([1, 2, 3, 4, 0, 6, 7, 5, 8])
    }

    fn short_budget() -> RunConfig {
        RunConfig::default()
            .with_budget(Duration::from_millis(100))
            .with_cancel_grace(Duration::from_millis(100))
    }

    /// Spins until cancelled, counting a node per iteration.
    fn until_cancelled(_: &EightPuzzle, ctx: &SearchContext) -> Result<(), StrategyError> {
        loop {
            ctx.check()?;
            ctx.count_node();
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_instant_strategy_completes() {
        let config = RunConfig::default().with_budget(Duration::from_secs(5));
        let execution = execute(|_, _| Ok(42), example(), &config);

        assert_eq!(execution.outcome, Outcome::Completed(42));
        assert!(execution.elapsed < config.budget);
    }

    #[test]
    fn test_real_strategy_completes_with_nodes() {
        let config = RunConfig::default().with_budget(Duration::from_secs(10));
        let execution = execute(
            |puzzle, ctx| Strategy::H1.search(puzzle, ctx),
            example(),
            &config,
        );

        match execution.outcome {
            Outcome::Completed(solution) => assert_eq!(solution.path_string(), "DR"),
            other => panic!("expected completion, got {:?}", other),
        }
        assert!(execution.nodes >= 1);
    }

    #[test]
    fn test_slow_strategy_times_out_within_bound() {
        let config = short_budget();
        let started = Instant::now();
        let execution = execute(until_cancelled, example(), &config);
        let waited = started.elapsed();

        assert_eq!(execution.outcome, Outcome::TimedOut);
        assert!(execution.elapsed >= config.budget);
        assert!(
            waited < config.max_wait() + Duration::from_millis(500),
            "caller blocked for {:?}",
            waited
        );
    }

    #[test]
    fn test_timeout_cancels_cooperative_worker() {
        let stopped = Arc::new(std::sync::atomic::AtomicBool::new(false));
        let flag = Arc::clone(&stopped);
        let execution = execute(
            move |puzzle, ctx| {
                let result = until_cancelled(puzzle, ctx);
                flag.store(true, std::sync::atomic::Ordering::SeqCst);
                result
            },
            example(),
            &short_budget(),
        );

        assert_eq!(execution.outcome, Outcome::TimedOut);
        // Worker was joined, so it has already observed cancellation
        assert!(stopped.load(std::sync::atomic::Ordering::SeqCst));
    }

    #[test]
    fn test_uncooperative_worker_is_detached() {
        let config = RunConfig::default()
            .with_budget(Duration::from_millis(50))
            .with_cancel_grace(Duration::from_millis(20));
        let started = Instant::now();
        let execution = execute(
            |_, _| {
                thread::sleep(Duration::from_secs(3));
                Ok(())
            },
            example(),
            &config,
        );

        assert_eq!(execution.outcome, Outcome::TimedOut);
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn test_strategy_error_is_failure_not_timeout() {
        let execution: Execution<()> = execute(
            |_, _| Err(StrategyError::Exhausted),
            example(),
            &short_budget(),
        );
        assert_eq!(
            execution.outcome,
            Outcome::Failed(StrategyError::Exhausted.to_string())
        );
    }

    #[test]
    fn test_panic_is_failure() {
        let execution: Execution<()> = execute(
            |_, _| panic!("boom"),
            example(),
            &short_budget(),
        );
        match execution.outcome {
            Outcome::Failed(cause) => assert!(cause.contains("boom"), "cause: {}", cause),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_concurrent_executions_do_not_interfere() {
        let handles: Vec<_> = (0..4u32)
            .map(|i| {
                thread::spawn(move || {
                    let config = RunConfig::default().with_budget(Duration::from_secs(5));
                    execute(move |_, _| Ok(i), example(), &config).outcome
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), Outcome::Completed(i as u32));
        }
    }
}
