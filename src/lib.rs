#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod cli;
pub mod config;
pub mod engine;
pub mod episode;
pub mod episodes;
pub mod error;
pub mod factory;
pub mod index;
pub mod library;
pub mod matchers;
pub mod navigator;
pub mod ordering;
pub mod range;
pub mod resolver;
pub mod show_case;

pub use cli::{Cli, Commands, Direction, RequiredElement, default_config_path};
pub use config::{ConfigError, MatcherConfig, ResolutionConfig, ResolverConfig};
pub use engine::{MatchElement, TvMatcher};
pub use episode::{EpisodeMatch, NO_SEASON, Season};
pub use episodes::EpisodeMatcher;
pub use error::{AppError, Result};
pub use factory::{build_library, build_options, build_season_resolver, build_show_resolver};
pub use index::{SeasonsMap, TvMap};
pub use library::{
    EpisodeRange, LibraryMatcher, SeasonFormat, StandardLibrary, TvPath, VIDEO_EXTENSIONS,
    is_video_file, scan_videos,
};
pub use matchers::Strategy;
pub use navigator::{EpisodeNavigator, Pointer};
pub use range::Range;
pub use resolver::{DirectoryResolver, ResolutionOptions, SeasonResolver, ShowResolver};
