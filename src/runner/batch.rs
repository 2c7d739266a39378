//! Directory batch processing.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::{Error, Result};
use crate::puzzle::Board;
use crate::report::Report;
use crate::runner::config::RunConfig;
use crate::runner::orchestrator::run_all;
use crate::search::Registry;

/// Puzzle files directly inside `dir`, sorted by file name.
///
/// Sub-directories are skipped. Sorting keeps batch output stable across
/// platforms, whose directory listings come back in arbitrary order.
pub fn puzzle_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| Error::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

/// Run every registered strategy over every puzzle file in `dir`.
///
/// A file that cannot be loaded is logged and skipped; the rest of the batch
/// still runs. Only a failure to list `dir` itself is an error.
pub fn run_directory(dir: &Path, registry: &Registry, config: &RunConfig) -> Result<Vec<Vec<Report>>> {
    let mut batch = Vec::new();

    for path in puzzle_files(dir)? {
        let label = path.display().to_string();
        let board = match Board::load(&path) {
            Ok(board) => board,
            Err(e) => {
                warn!("skipping {}: {}", label, e);
                continue;
            }
        };

        info!("Processing {}", label);
        batch.push(run_all(&board, Some(label.as_str()), registry, config));
    }

    Ok(batch)
}
