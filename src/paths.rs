use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const STATE_DIR_NAME: &str = ".eqselect";
const STATE_FILE_NAME: &str = "exec.txt";

pub fn state_file_path() -> Result<PathBuf> {
    Ok(state_dir()?.join(STATE_FILE_NAME))
}

fn state_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("unable to resolve home directory")?;
    Ok(home.join(STATE_DIR_NAME))
}

/// Creates the state directory on first use. On Unix it is owner-private
/// apart from group read (0o740), matching the history file's sensitivity.
pub fn ensure_state_dir(file: &Path) -> Result<()> {
    let Some(dir) = file.parent() else {
        return Ok(());
    };
    if dir.is_dir() {
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o740);
    }
    builder
        .create(dir)
        .with_context(|| format!("failed to create state directory {}", dir.display()))
}
