use crate::engine::TvMatcher;
use crate::episode::EpisodeMatch;
use crate::ordering::by_episode_no;
use crate::range::Range;
use crate::resolver::ResolutionOptions;
use std::path::{Path, PathBuf};

/// Matches collections of paths, e.g. the contents of a season directory
#[derive(Debug, Clone, Default)]
pub struct EpisodeMatcher {
    matcher: TvMatcher,
}

impl EpisodeMatcher {
    pub fn new(options: ResolutionOptions) -> Self {
        Self {
            matcher: TvMatcher::new(options),
        }
    }

    pub fn matcher(&self) -> &TvMatcher {
        &self.matcher
    }

    pub fn match_path(&self, path: &Path) -> Option<EpisodeMatch> {
        self.matcher.match_path(path)
    }

    /// All matches, sorted by episode number
    pub fn match_paths(&self, paths: &[PathBuf]) -> Vec<EpisodeMatch> {
        self.match_paths_where(paths, |_| true)
    }

    /// Matches accepted by `predicate`, sorted by episode number
    pub fn match_paths_where<F>(&self, paths: &[PathBuf], predicate: F) -> Vec<EpisodeMatch>
    where
        F: Fn(&EpisodeMatch) -> bool,
    {
        let mut matches: Vec<EpisodeMatch> = paths
            .iter()
            .filter_map(|path| self.matcher.match_path(path))
            .filter(|m| predicate(m))
            .collect();
        matches.sort_by(by_episode_no);
        matches
    }

    /// First path (in the given order) whose match contains `episode`
    pub fn match_episode(&self, paths: &[PathBuf], episode: u32) -> Option<EpisodeMatch> {
        paths
            .iter()
            .filter_map(|path| self.matcher.match_path(path))
            .find(|m| m.is_episode_no(episode))
    }

    /// Matches whose episode range overlaps `range`
    pub fn match_range(&self, paths: &[PathBuf], range: Range) -> Vec<EpisodeMatch> {
        self.match_paths_where(paths, |m| range.contains_range(&m.episodes_as_range()))
    }

    /// Matches with at least one episode numbered `start` or later
    pub fn match_from(&self, paths: &[PathBuf], start: u32) -> Vec<EpisodeMatch> {
        let range = Range::max_range(start);
        self.match_paths_where(paths, |m| m.is_episode_in_range(&range))
    }

    /// Match with the highest last episode number. Ties go to the match
    /// sorting first.
    pub fn match_largest(&self, paths: &[PathBuf]) -> Option<EpisodeMatch> {
        self.match_paths(paths)
            .into_iter()
            .fold(None, |largest: Option<EpisodeMatch>, m| match largest {
                Some(l) if l.episodes_as_range().end >= m.episodes_as_range().end => Some(l),
                _ => Some(m),
            })
    }
}
