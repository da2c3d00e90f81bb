use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "eqselect",
    version,
    about = "Pick a not-yet-played media file from a directory tree and launch it"
)]
pub struct Cli {
    /// Continuous selection: always take the first eligible file instead of
    /// a random one.
    #[arg(short = 'c')]
    pub continuous: bool,

    /// Treat the starting directory as a leaf; sub-directories are ignored.
    #[arg(short = 'l')]
    pub leaf: bool,

    /// Repeat the last played file and exit without scanning.
    #[arg(short = 'r')]
    pub repeat_last: bool,

    /// Reset the played-files history before selecting.
    #[arg(short = 'z')]
    pub reset: bool,

    /// Directory to scan (defaults to the current directory).
    pub directory: Option<PathBuf>,
}
