//! Rendering run results as text and writing them to the console or a file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use crate::runner::result::{RunOutcome, RunResult};
use crate::search::Strategy;

const PATH_LENGTH_PREFIX: &str = "Path length: ";

/// Rendered summary of one run, optionally labelled with its file and strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub file: Option<String>,
    pub strategy: Option<Strategy>,
    pub result: RunResult,
}

impl Report {
    pub fn new(file: Option<String>, strategy: Option<Strategy>, result: RunResult) -> Self {
        Self {
            file,
            strategy,
            result,
        }
    }

    /// Labels followed by the four result lines.
    pub fn lines(&self, budget: Duration) -> Vec<String> {
        let mut lines = Vec::with_capacity(6);
        if let Some(file) = &self.file {
            lines.push(format!("File: {}", file));
        }
        if let Some(strategy) = self.strategy {
            lines.push(format!("Algorithm: {}", strategy));
        }
        lines.extend(render_result(&self.result, budget));
        lines
    }
}

/// Node count, elapsed time, path length and path, in that order.
pub fn render_result(result: &RunResult, budget: Duration) -> Vec<String> {
    let (length, path) = match &result.outcome {
        RunOutcome::Solved => (
            result.moves.len().to_string(),
            result.path_string().unwrap_or_default(),
        ),
        RunOutcome::TimedOut => ("Timed out.".to_string(), "Timed out.".to_string()),
        RunOutcome::Unsolvable => ("Not solvable.".to_string(), "Not solvable.".to_string()),
        RunOutcome::Failed(cause) => ("Failed.".to_string(), format!("Failed: {}", cause)),
    };

    vec![
        format!("Total nodes generated: {}", result.nodes),
        format!("Total time taken: {}", format_elapsed(result.elapsed, budget)),
        format!("{}{}", PATH_LENGTH_PREFIX, length),
        format!("Path: {}", path),
    ]
}

/// `<s> sec <micros> microSec.`, or `>` the budget once the budget is reached.
pub fn format_elapsed(elapsed: Duration, budget: Duration) -> String {
    if elapsed >= budget {
        return format!(">{}", format_budget(budget));
    }
    format!(
        "{} sec {:06} microSec.",
        elapsed.as_secs(),
        elapsed.subsec_micros()
    )
}

/// Human form of a budget: whole minutes, whole seconds, or milliseconds.
pub fn format_budget(budget: Duration) -> String {
    let secs = budget.as_secs();
    if budget.subsec_nanos() == 0 && secs >= 60 && secs % 60 == 0 {
        format!("{} min", secs / 60)
    } else if budget.subsec_nanos() == 0 && secs > 0 {
        format!("{} sec", secs)
    } else {
        format!("{} ms", budget.as_millis())
    }
}

/// Recover the path length from a rendered `Path length:` line.
pub fn parse_path_length(line: &str) -> Option<usize> {
    line.strip_prefix(PATH_LENGTH_PREFIX)?.trim().parse().ok()
}

/// Print lines to stdout, one per line.
pub fn write_console(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

/// Write every report of every file, each block followed by a blank line.
/// Any existing file at `path` is replaced.
pub fn write_file(path: &Path, batch: &[Vec<Report>], budget: Duration) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_batch(&mut out, batch, budget)?;
    out.flush()
}

pub fn write_batch<W: Write>(out: &mut W, batch: &[Vec<Report>], budget: Duration) -> io::Result<()> {
    for report in batch.iter().flatten() {
        for line in report.lines(budget) {
            writeln!(out, "{}", line)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Move;
    use crate::search::Solution;

    const BUDGET: Duration = Duration::from_secs(900);

    fn solved() -> RunResult {
        RunResult::solved(
            Solution::new(vec![Move::Down, Move::Right]),
            9,
            Duration::new(1, 234_567_000),
        )
    }

    #[test]
    fn test_render_solved() {
        let lines = render_result(&solved(), BUDGET);
        assert_eq!(
            lines,
            vec![
                "Total nodes generated: 9",
                "Total time taken: 1 sec 234567 microSec.",
                "Path length: 2",
                "Path: DR",
            ]
        );
    }

    #[test]
    fn test_render_timed_out() {
        let lines = render_result(&RunResult::timed_out(BUDGET), BUDGET);
        assert_eq!(
            lines,
            vec![
                "Total nodes generated: <<?>>",
                "Total time taken: >15 min",
                "Path length: Timed out.",
                "Path: Timed out.",
            ]
        );
    }

    #[test]
    fn test_render_unsolvable_and_failed() {
        let lines = render_result(&RunResult::unsolvable(), BUDGET);
        assert_eq!(lines[2], "Path length: Not solvable.");

        let failed = RunResult::failed("boom", 3, Duration::from_millis(1));
        let lines = render_result(&failed, BUDGET);
        assert_eq!(lines[0], "Total nodes generated: 3");
        assert_eq!(lines[3], "Path: Failed: boom");
    }

    #[test]
    fn test_path_length_round_trip() {
        let result = solved();
        let lines = render_result(&result, BUDGET);
        assert_eq!(parse_path_length(&lines[2]), result.path_length());
        assert_eq!(parse_path_length("Path length: Timed out."), None);
        assert_eq!(parse_path_length("Path: DR"), None);
    }

    #[test]
    fn test_format_budget() {
        assert_eq!(format_budget(Duration::from_secs(900)), "15 min");
        assert_eq!(format_budget(Duration::from_secs(90)), "90 sec");
        assert_eq!(format_budget(Duration::from_millis(250)), "250 ms");
    }

    #[test]
    fn test_format_elapsed_pads_micros() {
        assert_eq!(
            format_elapsed(Duration::from_micros(42), BUDGET),
            "0 sec 000042 microSec."
        );
    }

    #[test]
    fn test_report_labels() {
        let report = Report::new(Some("a.txt".into()), Some(Strategy::H1), solved());
        let lines = report.lines(BUDGET);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "File: a.txt");
        assert_eq!(lines[1], "Algorithm: h1");

        let bare = Report::new(None, None, solved());
        assert_eq!(bare.lines(BUDGET).len(), 4);
    }

    #[test]
    fn test_write_batch_blocks() {
        let batch = vec![
            vec![
                Report::new(Some("a".into()), Some(Strategy::Bfs), solved()),
                Report::new(Some("a".into()), Some(Strategy::H2), solved()),
            ],
            vec![Report::new(Some("b".into()), None, RunResult::unsolvable())],
        ];
        let mut out = Vec::new();
        write_batch(&mut out, &batch, BUDGET).unwrap();
        let text = String::from_utf8(out).unwrap();

        let blocks: Vec<_> = text.split("\n\n").filter(|b| !b.is_empty()).collect();
        assert_eq!(blocks.len(), 3);
        assert!(blocks[2].starts_with("File: b\nTotal nodes generated: <<?>>"));
        assert!(text.ends_with("Path: Not solvable.\n\n"));
    }
}
