use crate::config::{MatcherConfig, ResolutionConfig, ResolverConfig};
use crate::library::StandardLibrary;
use crate::resolver::{DirectoryResolver, ResolutionOptions, SeasonResolver, ShowResolver};
use std::sync::Arc;

pub fn build_options(config: &ResolutionConfig) -> ResolutionOptions {
    let mut options = ResolutionOptions::new();

    if let Some(resolver) = config.show {
        options = options.with_show(build_show_resolver(resolver));
    }
    if let Some(resolver) = config.season {
        options = options.with_season(build_season_resolver(resolver));
    }
    if let Some(resolver) = config.fallback_show {
        options = options.fallback_show(build_show_resolver(resolver));
    }
    if let Some(resolver) = config.fallback_season {
        options = options.fallback_season(build_season_resolver(resolver));
    }
    if config.fallback_to_pattern_show {
        options = options.fallback_to_pattern_show();
    }
    if config.fallback_to_pattern_season {
        options = options.fallback_to_pattern_season();
    }

    options
}

pub fn build_show_resolver(config: ResolverConfig) -> Arc<dyn ShowResolver> {
    match config {
        ResolverConfig::Directory => Arc::new(DirectoryResolver::new()),
    }
}

pub fn build_season_resolver(config: ResolverConfig) -> Arc<dyn SeasonResolver> {
    match config {
        ResolverConfig::Directory => Arc::new(DirectoryResolver::new()),
    }
}

pub fn build_library(config: &MatcherConfig) -> StandardLibrary {
    StandardLibrary::with_roots(config.sources.clone())
}
