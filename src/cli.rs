use crate::engine::MatchElement;
use crate::navigator::Pointer;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Find default config path with priority:
/// 1. /etc/tvmatch/config.yaml (system-wide, preferred)
/// 2. ~/.config/tvmatch/config.yaml (user-specific)
/// 3. Fallback to /etc even if doesn't exist
pub fn default_config_path() -> PathBuf {
    let etc_path = PathBuf::from("/etc/tvmatch/config.yaml");

    if etc_path.exists() {
        return etc_path;
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join("tvmatch/config.yaml");
        if user_path.exists() {
            return user_path;
        }
    }

    etc_path
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RequiredElement {
    None,
    Show,
    Season,
    All,
}

impl RequiredElement {
    pub const fn to_match_element(self) -> Option<MatchElement> {
        match self {
            Self::None => None,
            Self::Show => Some(MatchElement::Show),
            Self::Season => Some(MatchElement::Season),
            Self::All => Some(MatchElement::All),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    Prev,
    Cur,
    Next,
}

impl From<Direction> for Pointer {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Prev => Self::Prev,
            Direction::Cur => Self::Cur,
            Direction::Next => Self::Next,
        }
    }
}

#[derive(Parser)]
#[command(name = "tvmatch")]
#[command(version)]
#[command(about = "Match TV episode file names and navigate TV libraries", long_about = None)]
pub struct Cli {
    /// Path to configuration file [default: /etc/tvmatch/config.yaml]
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match show, season and episodes from file names
    Match {
        /// Files to match
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Fail when the element is missing from a match
        #[arg(short, long, value_enum, default_value = "none")]
        require: RequiredElement,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Match every video below a directory and summarize by show and season
    Scan {
        /// Directory to scan
        dir: PathBuf,

        /// Only scan the top level of the directory
        #[arg(long)]
        no_recursive: bool,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find the previous, current or next episode in the library
    Navigate {
        #[arg(long)]
        show: String,

        #[arg(long)]
        season: u32,

        #[arg(long)]
        episode: u32,

        #[arg(short, long, value_enum, default_value = "next")]
        direction: Direction,
    },

    /// Find the most recent episode of a show in the library
    Latest {
        #[arg(long)]
        show: String,
    },
}
