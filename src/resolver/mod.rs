mod directory;

pub use directory::DirectoryResolver;

use crate::episode::NO_SEASON;
use crate::show_case;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Resolves a show name from an episode path, independent of the file name
pub trait ShowResolver: Send + Sync {
    fn resolve_show(&self, path: &Path) -> Option<String>;
    fn name(&self) -> &str;
}

/// Resolves a season number from an episode path.
/// Returns `NO_SEASON` when the path carries no season.
pub trait SeasonResolver: Send + Sync {
    fn resolve_season(&self, path: &Path) -> i32;
    fn name(&self) -> &str;
}

/// Policy for deciding where show and season values come from.
///
/// Precedence for each element: primary resolver (or the file name capture
/// when no primary is set), then the fallback resolver, then the file name
/// capture if the matching `fallback_to_pattern_*` flag is set.
#[derive(Clone, Default)]
pub struct ResolutionOptions {
    pub show: Option<Arc<dyn ShowResolver>>,
    pub season: Option<Arc<dyn SeasonResolver>>,
    pub fallback_show: Option<Arc<dyn ShowResolver>>,
    pub fallback_season: Option<Arc<dyn SeasonResolver>>,
    pub fallback_to_pattern_show: bool,
    pub fallback_to_pattern_season: bool,
}

impl ResolutionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_show(mut self, resolver: Arc<dyn ShowResolver>) -> Self {
        self.show = Some(resolver);
        self
    }

    pub fn with_season(mut self, resolver: Arc<dyn SeasonResolver>) -> Self {
        self.season = Some(resolver);
        self
    }

    /// Use one resolver as primary for both show and season
    pub fn with_elements<R>(self, resolver: Arc<R>) -> Self
    where
        R: ShowResolver + SeasonResolver + 'static,
    {
        let show: Arc<dyn ShowResolver> = resolver.clone();
        let season: Arc<dyn SeasonResolver> = resolver;
        self.with_show(show).with_season(season)
    }

    pub fn fallback_show(mut self, resolver: Arc<dyn ShowResolver>) -> Self {
        self.fallback_show = Some(resolver);
        self
    }

    pub fn fallback_season(mut self, resolver: Arc<dyn SeasonResolver>) -> Self {
        self.fallback_season = Some(resolver);
        self
    }

    /// Use one resolver as fallback for both show and season
    pub fn fallback<R>(self, resolver: Arc<R>) -> Self
    where
        R: ShowResolver + SeasonResolver + 'static,
    {
        let show: Arc<dyn ShowResolver> = resolver.clone();
        let season: Arc<dyn SeasonResolver> = resolver;
        self.fallback_show(show).fallback_season(season)
    }

    pub fn fallback_to_pattern(self) -> Self {
        self.fallback_to_pattern_show().fallback_to_pattern_season()
    }

    pub fn fallback_to_pattern_show(mut self) -> Self {
        self.fallback_to_pattern_show = true;
        self
    }

    pub fn fallback_to_pattern_season(mut self) -> Self {
        self.fallback_to_pattern_season = true;
        self
    }

    /// Decide the show for `path` given the file name capture.
    /// Captures are title cased; resolver output is used as is.
    pub fn resolve_show(&self, path: &Path, capture: Option<&str>) -> Option<String> {
        let resolved = match &self.show {
            Some(resolver) => resolver.resolve_show(path),
            None => show_from_capture(capture),
        };
        if resolved.as_deref().is_some_and(|show| !show.is_empty()) {
            return resolved;
        }

        if let Some(fallback) = &self.fallback_show {
            fallback.resolve_show(path)
        } else if self.fallback_to_pattern_show {
            show_from_capture(capture)
        } else {
            None
        }
    }

    /// Decide the season for `path` given the file name capture
    pub fn resolve_season(&self, path: &Path, capture: Option<i32>) -> i32 {
        let season = match &self.season {
            Some(resolver) => resolver.resolve_season(path),
            None => capture.unwrap_or(NO_SEASON),
        };
        if season != NO_SEASON {
            return season;
        }

        if let Some(fallback) = &self.fallback_season {
            fallback.resolve_season(path)
        } else if self.fallback_to_pattern_season {
            capture.unwrap_or(NO_SEASON)
        } else {
            NO_SEASON
        }
    }
}

impl fmt::Debug for ResolutionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolutionOptions")
            .field("show", &self.show.as_ref().map(|r| r.name().to_string()))
            .field("season", &self.season.as_ref().map(|r| r.name().to_string()))
            .field(
                "fallback_show",
                &self.fallback_show.as_ref().map(|r| r.name().to_string()),
            )
            .field(
                "fallback_season",
                &self.fallback_season.as_ref().map(|r| r.name().to_string()),
            )
            .field("fallback_to_pattern_show", &self.fallback_to_pattern_show)
            .field("fallback_to_pattern_season", &self.fallback_to_pattern_season)
            .finish()
    }
}

fn show_from_capture(capture: Option<&str>) -> Option<String> {
    capture
        .filter(|show| !show.is_empty())
        .map(show_case::convert)
}
