mod player;
mod scan;


use std::env;
use std::path::Path;

use anyhow::{Context, Result, bail};
use rand::Rng;

use crate::cli::Cli;
use crate::history::History;
use crate::paths::{ensure_state_dir, state_file_path};

use self::scan::{ScanOptions, collect_candidates};

pub fn run(cli: Cli) -> Result<()> {
    let state_file = state_file_path()?;
    ensure_state_dir(&state_file)?;

    let root = match cli.directory {
        Some(dir) => dir,
        None => env::current_dir().context("unable to resolve current directory")?,
    };
    if !root.is_dir() {
        bail!("specified path can't be accessed: {}", root.display());
    }
    println!("Working directory: {}", root.display());

    let mut history = if cli.reset {
        let mut history = History::new();
        history.reset(&state_file)?;
        history
    } else {
        History::load(&state_file)?
    };

    let options = ScanOptions {
        continuous: cli.continuous,
        leaf_only: cli.leaf,
    };
    match select_for_launch(&root, cli.repeat_last, options, &mut history, &state_file)? {
        Selection::Repeat(name) => {
            println!("Repeating: {name}");
            player::launch(&root, &name)
        }
        Selection::Fresh(name) => {
            println!("Selected: {name}");
            player::launch(&root, &name)
        }
    }
}

#[derive(Debug, PartialEq)]
enum Selection {
    /// The last history entry, replayed as-is; nothing was scanned or
    /// recorded.
    Repeat(String),
    /// A freshly chosen file, already appended to the history.
    Fresh(String),
}

/// Decides what the player should be launched on. Repeat-last takes
/// precedence over everything else, but only when there is something to
/// repeat; otherwise the tree is walked and one candidate chosen.
fn select_for_launch(
    root: &Path,
    repeat_last: bool,
    options: ScanOptions,
    history: &mut History,
    state_file: &Path,
) -> Result<Selection> {
    if repeat_last {
        if let Some(last) = history.last() {
            return Ok(Selection::Repeat(last.to_owned()));
        }
    }

    let selected = choose_candidate(root, options, history, state_file)?;
    // The selection is recorded before the spawn; a player that fails to
    // start still counts as played.
    history.record(state_file, &selected)?;
    Ok(Selection::Fresh(selected))
}

/// Walks the tree and picks one eligible file. An empty first walk means
/// every file has been played once, so the history is cleared and the walk
/// repeated to start a new cycle.
fn choose_candidate(
    root: &Path,
    options: ScanOptions,
    history: &mut History,
    state_file: &Path,
) -> Result<String> {
    let mut candidates = collect_candidates(root, history, options)?;
    if candidates.is_empty() {
        if !history.is_empty() {
            println!("All files played once, starting over.");
        }
        history.reset(state_file)?;
        candidates = collect_candidates(root, history, options)?;
    }
    if candidates.is_empty() {
        bail!("no file to execute under {}", root.display());
    }

    let index = pick_index(candidates.len(), options.continuous);
    Ok(candidates.swap_remove(index))
}

/// Continuous mode and single-candidate sets are deterministic; everything
/// else draws a uniformly random index from the thread RNG.
fn pick_index(count: usize, continuous: bool) -> usize {
    if continuous || count == 1 {
        0
    } else {
        rand::thread_rng().gen_range(0..count)
    }
}
