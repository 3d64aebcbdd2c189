use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

use crate::core::WalkOptions;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "bush")]
#[command(about = "Recursively list the contents of a directory", long_about = None)]
pub struct Cli {
    /// Directories to walk (defaults to the current directory)
    pub paths: Vec<PathBuf>,

    /// Levels to walk into each directory (0 means unlimited)
    #[arg(short = 'L', long, env = "BUSH_LEVELS", default_value_t = 0)]
    pub levels: usize,

    /// Comma-separated substrings; matching paths are skipped
    #[arg(short = 'I', long, env = "BUSH_IGNORE", default_value = "")]
    pub ignore: String,

    /// List directories before files
    #[arg(long, env = "BUSH_DIRS_FIRST")]
    pub dirs_first: bool,

    /// When to color directories
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Enable verbose logging. Use -v for info, -vv for debug, -vvv for trace.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn roots(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.paths.clone()
        }
    }

    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            max_depth: self.levels,
            ignore_pattern: (!self.ignore.is_empty()).then(|| self.ignore.clone()),
            dirs_first: self.dirs_first,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
