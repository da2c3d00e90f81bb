use std::path::{Path, PathBuf};
use std::process::{Command as ProcessCommand, Stdio};

use anyhow::{Context, Result};

#[cfg(unix)]
use std::os::unix::process::CommandExt;

/// The player binary is a build-time constant, not a flag.
const DEFAULT_PLAYER: &str = "vlc";

pub(crate) fn resolve_player_bin() -> PathBuf {
    PathBuf::from(DEFAULT_PLAYER)
}

/// Launches the player on `file` and returns without waiting for it.
///
/// `file` is relative to the scan root, so the child runs with `root` as its
/// working directory. The filename is passed as a single argv entry; no
/// shell is involved. On Unix the child is moved into its own session so it
/// outlives this process.
pub(crate) fn launch(root: &Path, file: &str) -> Result<()> {
    let player = resolve_player_bin();
    let mut cmd = ProcessCommand::new(&player);
    cmd.arg(file)
        .current_dir(root)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    #[cfg(unix)]
    unsafe {
        cmd.pre_exec(|| {
            if libc::setsid() == -1 {
                return Err(std::io::Error::last_os_error());
            }
            Ok(())
        });
    }

    cmd.spawn()
        .with_context(|| format!("failed to launch {}", player.display()))?;
    Ok(())
}
