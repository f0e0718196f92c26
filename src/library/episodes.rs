use super::TvPath;
use crate::episode::{EpisodeMatch, Season};
use crate::episodes::EpisodeMatcher;
use crate::error::Result;
use crate::range::Range;
use std::path::Path;

/// Span of episodes that may cross season boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeRange {
    pub start_season: u32,
    pub start_episode: u32,
    pub end_season: u32,
    pub end_episode: u32,
}

impl EpisodeRange {
    pub const fn new(
        start_season: u32,
        start_episode: u32,
        end_season: u32,
        end_episode: u32,
    ) -> Self {
        Self {
            start_season,
            start_episode,
            end_season,
            end_episode,
        }
    }

    /// Episode numbers covered when the range stays within one season
    pub const fn to_range(&self) -> Range {
        Range::new(self.start_episode, self.end_episode)
    }
}

/// Episode queries against a library layout
#[derive(Debug, Clone)]
pub struct LibraryMatcher<P: TvPath> {
    library: P,
    matcher: EpisodeMatcher,
}

impl<P: TvPath> LibraryMatcher<P> {
    pub fn new(library: P, matcher: EpisodeMatcher) -> Self {
        Self { library, matcher }
    }

    pub fn library(&self) -> &P {
        &self.library
    }

    pub fn matcher(&self) -> &EpisodeMatcher {
        &self.matcher
    }

    pub fn match_episode(
        &self,
        show: &str,
        season: u32,
        episode: u32,
    ) -> Result<Option<EpisodeMatch>> {
        let paths = self.library.list_episode_paths(show, season)?;
        Ok(self.matcher.match_episode(&paths, episode))
    }

    pub fn match_episode_in(&self, episodes_path: &Path, episode: u32) -> Option<EpisodeMatch> {
        self.matcher
            .match_episode(&self.library.list_paths(episodes_path), episode)
    }

    pub fn match_largest_episode(&self, show: &str, season: u32) -> Result<Option<EpisodeMatch>> {
        let paths = self.library.list_episode_paths(show, season)?;
        Ok(self.matcher.match_largest(&paths))
    }

    pub fn match_largest_episode_in(&self, episodes_path: &Path) -> Option<EpisodeMatch> {
        self.matcher
            .match_largest(&self.library.list_paths(episodes_path))
    }

    /// Largest episode of the largest season
    pub fn match_latest_episode(&self, show: &str) -> Result<Option<EpisodeMatch>> {
        let seasons = self.library.list_seasons(show)?;
        Ok(Self::largest_season(&seasons)
            .and_then(|season| self.match_largest_episode_in(&season.path)))
    }

    pub fn match_season(&self, show: &str, season: u32) -> Result<Vec<EpisodeMatch>> {
        self.match_season_range(show, Range::single(season))
    }

    /// Episodes of every season numbered within `range`, season by season
    pub fn match_season_range(&self, show: &str, range: Range) -> Result<Vec<EpisodeMatch>> {
        let mut matches = Vec::new();
        for season in self.library.list_seasons(show)? {
            if range.contains(season.number) {
                matches.extend(self.matcher.match_paths(&self.library.list_paths(&season.path)));
            }
        }
        Ok(matches)
    }

    pub fn match_seasons_from(&self, show: &str, season: u32) -> Result<Vec<EpisodeMatch>> {
        self.match_season_range(show, Range::max_range(season))
    }

    pub fn match_largest_season(&self, show: &str) -> Result<Vec<EpisodeMatch>> {
        let seasons = self.library.list_seasons(show)?;
        Ok(Self::largest_season(&seasons)
            .map(|season| self.matcher.match_paths(&self.library.list_paths(&season.path)))
            .unwrap_or_default())
    }

    /// Highest numbered season; the first one listed wins a tie
    pub fn largest_season(seasons: &[Season]) -> Option<&Season> {
        seasons.iter().fold(None, |largest: Option<&Season>, season| match largest {
            Some(l) if l.number >= season.number => Some(l),
            _ => Some(season),
        })
    }

    pub fn match_episodes_from(
        &self,
        show: &str,
        season: u32,
        episode: u32,
    ) -> Result<Vec<EpisodeMatch>> {
        let paths = self.library.list_episode_paths(show, season)?;
        Ok(self.matcher.match_from(&paths, episode))
    }

    pub fn match_episode_range(
        &self,
        show: &str,
        range: EpisodeRange,
    ) -> Result<Vec<EpisodeMatch>> {
        if range.start_season > range.end_season {
            return Ok(Vec::new());
        }
        if range.start_season == range.end_season {
            let paths = self.library.list_episode_paths(show, range.start_season)?;
            return Ok(self.matcher.match_range(&paths, range.to_range()));
        }

        let mut matches = self.match_episodes_from(show, range.start_season, range.start_episode)?;
        let middle = Range::new(range.start_season + 1, range.end_season - 1);
        if !middle.is_empty() {
            matches.extend(self.match_season_range(show, middle)?);
        }
        let paths = self.library.list_episode_paths(show, range.end_season)?;
        matches.extend(self.matcher.match_range(&paths, Range::new(0, range.end_episode)));
        Ok(matches)
    }

    pub fn match_all_episodes(&self, show: &str) -> Result<Vec<EpisodeMatch>> {
        self.match_seasons_from(show, 1)
    }
}
