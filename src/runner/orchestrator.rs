//! Drive one or many strategies over a board and collect reports.

use std::time::Duration;

use log::{error, info};

use crate::puzzle::{Board, EightPuzzle};
use crate::report::Report;
use crate::runner::config::RunConfig;
use crate::runner::executor::{Execution, Outcome, execute};
use crate::runner::result::RunResult;
use crate::search::{Registry, SearchStrategy, Solution, Strategy};

/// Run a single strategy on a fresh instance built from `board`.
///
/// An unsolvable board short-circuits to an `Unsolvable` result without
/// starting the strategy.
pub fn run_strategy(board: &Board, strategy: Strategy, config: &RunConfig) -> RunResult {
    let puzzle = EightPuzzle::from_board(board);
    if !puzzle.solvable {
        return RunResult::unsolvable();
    }

    let execution = execute(
        move |puzzle, ctx| strategy.search(puzzle, ctx),
        puzzle,
        config,
    );
    result_from(execution, strategy, config.budget)
}

/// Map an execution onto the reported result. Timed-out runs report the
/// budget as their elapsed time and an unknown node count.
fn result_from(execution: Execution<Solution>, strategy: Strategy, budget: Duration) -> RunResult {
    match execution.outcome {
        Outcome::Completed(solution) => {
            RunResult::solved(solution, execution.nodes, execution.elapsed)
        }
        Outcome::TimedOut => RunResult::timed_out(budget),
        Outcome::Failed(cause) => {
            error!("{} failed: {}", strategy, cause);
            RunResult::failed(cause, execution.nodes, execution.elapsed)
        }
    }
}

/// Run one explicitly chosen strategy and label the report with it.
pub fn run_one(
    board: &Board,
    file: Option<&str>,
    strategy: Strategy,
    config: &RunConfig,
) -> Report {
    let result = run_strategy(board, strategy, config);
    Report::new(file.map(str::to_string), Some(strategy), result)
}

/// Run every registered strategy in registry order.
///
/// An unsolvable board yields a single unlabelled-strategy `Unsolvable`
/// report and no strategy is attempted.
pub fn run_all(
    board: &Board,
    file: Option<&str>,
    registry: &Registry,
    config: &RunConfig,
) -> Vec<Report> {
    let label = file.map(str::to_string);
    if !EightPuzzle::from_board(board).solvable {
        info!(
            "{} is not solvable, skipping all strategies",
            file.unwrap_or("puzzle")
        );
        return vec![Report::new(label, None, RunResult::unsolvable())];
    }

    let mut reports = Vec::with_capacity(registry.strategies().len());
    for &strategy in registry.strategies() {
        info!("Starting {} on {}", strategy, file.unwrap_or("puzzle"));
        let report = run_one(board, file, strategy, config);
        info!("Completed {} ({:?})", strategy, report.result.outcome);
        reports.push(report);
    }
    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Move;
    use crate::runner::result::{NodeCount, RunOutcome};

    fn board(text: &str) -> Board {
        Board::parse(text).unwrap()
    }

    fn config() -> RunConfig {
        RunConfig::default().with_budget(Duration::from_secs(30))
    }

    #[test]
    fn test_run_one_h1_example() {
        let report = run_one(&board("1 2 3\n4 0 6\n7 5 8"), None, Strategy::H1, &config());
        let result = &report.result;

        assert_eq!(result.outcome, RunOutcome::Solved);
        assert!(result.path_length().unwrap() >= 1);
        assert!(matches!(result.nodes, NodeCount::Known(n) if n >= 1));
        assert!(result.elapsed < config().budget);
        assert_eq!(report.strategy, Some(Strategy::H1));
    }

    #[test]
    fn test_unsolvable_short_circuits_every_strategy() {
        let unsolvable = board("1 2 3\n4 5 6\n8 7 0");
        for strategy in Strategy::ALL {
            let result = run_strategy(&unsolvable, strategy, &config());
            assert_eq!(result.outcome, RunOutcome::Unsolvable);
            assert_eq!(result.elapsed, Duration::ZERO);
        }

        let reports = run_all(&unsolvable, Some("bad.txt"), &Registry::default(), &config());
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].result.outcome, RunOutcome::Unsolvable);
        assert_eq!(reports[0].strategy, None);
        assert_eq!(reports[0].file.as_deref(), Some("bad.txt"));
    }

    #[test]
    fn test_run_all_follows_registry_order() {
        let registry = Registry::new(vec![Strategy::H3, Strategy::Bfs, Strategy::H2]).unwrap();
        let reports = run_all(&board("1 2 3\n4 0 6\n7 5 8"), Some("ok.txt"), &registry, &config());

        let order: Vec<_> = reports.iter().filter_map(|r| r.strategy).collect();
        assert_eq!(order, vec![Strategy::H3, Strategy::Bfs, Strategy::H2]);
        assert!(reports.iter().all(|r| r.result.is_solved()));
        assert!(reports.iter().all(|r| r.file.as_deref() == Some("ok.txt")));
    }

    #[test]
    fn test_timeout_reports_budget_ceiling() {
        // bfs on a 31-move puzzle cannot finish in a millisecond
        let hard = board("8 6 7\n2 5 4\n3 0 1");
        let budget = Duration::from_millis(1);
        let config = RunConfig::default()
            .with_budget(budget)
            .with_cancel_grace(Duration::from_secs(1));

        let result = run_strategy(&hard, Strategy::Bfs, &config);
        assert_eq!(result.outcome, RunOutcome::TimedOut);
        assert_eq!(result.elapsed, budget);
        assert_eq!(result.nodes, NodeCount::Unknown);
        assert_eq!(result.path_length(), None);
    }

    #[test]
    fn test_failed_execution_keeps_nodes_and_cause() {
        let execution = Execution {
            outcome: Outcome::Failed("strategy panicked: boom".to_string()),
            nodes: 7,
            elapsed: Duration::from_millis(3),
        };
        let result = result_from(execution, Strategy::Ids, config().budget);

        assert_eq!(
            result.outcome,
            RunOutcome::Failed("strategy panicked: boom".to_string())
        );
        assert_eq!(result.nodes, NodeCount::Known(7));
        assert_eq!(result.elapsed, Duration::from_millis(3));
        assert_eq!(result.path_length(), None);
        assert!(!result.is_solved());
    }

    #[test]
    fn test_completed_and_timed_out_executions() {
        let solved = result_from(
            Execution {
                outcome: Outcome::Completed(Solution::new(vec![Move::Down, Move::Right])),
                nodes: 9,
                elapsed: Duration::from_millis(2),
            },
            Strategy::H2,
            config().budget,
        );
        assert_eq!(solved.outcome, RunOutcome::Solved);
        assert_eq!(solved.path_string().as_deref(), Some("DR"));

        let budget = Duration::from_secs(5);
        let timed_out = result_from(
            Execution {
                outcome: Outcome::TimedOut,
                nodes: 1_000,
                elapsed: budget,
            },
            Strategy::Bfs,
            budget,
        );
        assert_eq!(timed_out.outcome, RunOutcome::TimedOut);
        assert_eq!(timed_out.elapsed, budget);
        assert_eq!(timed_out.nodes, NodeCount::Unknown);
    }
}
