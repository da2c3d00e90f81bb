use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::filetype::valid_extension;
use crate::history::History;

/// Longest relative path the history format carries, terminator included.
/// Anything longer is skipped with a warning instead of being truncated.
pub(crate) const MAX_PATH_BYTES: usize = 500;

#[derive(Debug, Clone, Copy)]
pub(crate) struct ScanOptions {
    /// Stop at the first eligible file; continuous mode never needs more.
    pub(crate) continuous: bool,
    /// Do not descend into sub-directories.
    pub(crate) leaf_only: bool,
}

/// Walks the tree under `root` and collects every media file not yet in the
/// history, as paths relative to `root`. Only a failure to read the root
/// itself is fatal; unreadable branches and unusable names are warned about
/// and skipped.
pub(crate) fn collect_candidates(
    root: &Path,
    history: &History,
    options: ScanOptions,
) -> Result<Vec<String>> {
    let mut walker = WalkDir::new(root).follow_links(false).sort_by_file_name();
    if options.leaf_only {
        walker = walker.max_depth(1);
    }

    let mut candidates = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                if err.path() == Some(root) {
                    return Err(err).with_context(|| {
                        format!("specified path can't be accessed: {}", root.display())
                    });
                }
                match err.path() {
                    Some(path) => println!("Warning: can't enter {}: {err}", path.display()),
                    None => println!("Warning: {err}"),
                }
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        let relative = match entry.path().strip_prefix(root) {
            Ok(relative) => relative,
            Err(_) => continue,
        };
        let Some(relative) = relative.to_str() else {
            println!(
                "Warning: skipping non-UTF-8 name {}",
                entry.path().display()
            );
            continue;
        };
        if relative.len() >= MAX_PATH_BYTES {
            println!("Warning: path too long, skipping {relative}");
            continue;
        }
        if !valid_extension(relative) {
            continue;
        }
        if history.contains(relative) {
            continue;
        }

        candidates.push(relative.to_owned());
        if options.continuous {
            break;
        }
    }

    Ok(candidates)
}
