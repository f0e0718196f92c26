use crate::range::Range;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// Season value used when a match carries no season
pub const NO_SEASON: i32 = -1;

/// Show, season and episode numbers extracted from a file name.
///
/// Equality and hashing only consider show, season and the episode list
/// (in order); the file path is informational.
#[derive(Debug, Clone, Serialize)]
pub struct EpisodeMatch {
    pub show: Option<String>,
    pub season: i32,
    pub episodes: Vec<u32>,
    pub file: Option<PathBuf>,
}

impl EpisodeMatch {
    pub fn new(show: Option<String>, season: i32, episodes: Vec<u32>) -> Self {
        Self {
            show,
            season,
            episodes,
            file: None,
        }
    }

    pub fn for_show(show: impl Into<String>, season: i32, episode: u32) -> Self {
        Self::new(Some(show.into()), season, vec![episode])
    }

    pub fn without_show(season: i32, episode: u32) -> Self {
        Self::new(None, season, vec![episode])
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn show(&self) -> Option<&str> {
        self.show.as_deref()
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn has_season(&self) -> bool {
        self.season != NO_SEASON
    }

    pub fn add_episode(&mut self, episode: u32) {
        self.episodes.push(episode);
    }

    pub fn add_episodes(&mut self, episodes: impl IntoIterator<Item = u32>) {
        self.episodes.extend(episodes);
    }

    /// Lowest episode number
    pub fn episode(&self) -> u32 {
        self.episodes_as_range().start
    }

    /// Range from the lowest to the highest episode number.
    /// A match without episodes yields an empty range.
    pub fn episodes_as_range(&self) -> Range {
        let start = self.episodes.iter().copied().min().unwrap_or(u32::MAX);
        let end = self.episodes.iter().copied().max().unwrap_or(0);
        Range::new(start, end)
    }

    pub fn is_multi_episode(&self) -> bool {
        self.episodes.len() > 1
    }

    pub fn is_episode_no(&self, episode: u32) -> bool {
        self.episodes.contains(&episode)
    }

    /// True if any episode number of this match falls inside `range`
    pub fn is_episode_in_range(&self, range: &Range) -> bool {
        self.episodes.iter().any(|&episode| range.contains(episode))
    }

    /// One single-episode match per episode number, keeping show, season
    /// and file.
    pub fn to_split_episode_list(&self) -> Vec<EpisodeMatch> {
        self.episodes
            .iter()
            .map(|&episode| EpisodeMatch {
                show: self.show.clone(),
                season: self.season,
                episodes: vec![episode],
                file: self.file.clone(),
            })
            .collect()
    }
}

impl Default for EpisodeMatch {
    fn default() -> Self {
        Self::new(None, NO_SEASON, Vec::new())
    }
}

impl PartialEq for EpisodeMatch {
    fn eq(&self, other: &Self) -> bool {
        self.show == other.show && self.season == other.season && self.episodes == other.episodes
    }
}

impl Eq for EpisodeMatch {}

impl Hash for EpisodeMatch {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.show.hash(state);
        self.season.hash(state);
        self.episodes.hash(state);
    }
}

impl fmt::Display for EpisodeMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_season() {
            write!(f, "s{:02}", self.season)?;
        }
        for episode in &self.episodes {
            write!(f, "e{episode:02}")?;
        }
        Ok(())
    }
}

/// Season directory of a show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Season {
    pub number: u32,
    pub path: PathBuf,
}

impl Season {
    pub fn new(number: u32, path: impl Into<PathBuf>) -> Self {
        Self {
            number,
            path: path.into(),
        }
    }

    /// Zero padded season number, e.g. "02"
    pub fn as_string(&self) -> String {
        format!("{:02}", self.number)
    }
}

impl PartialOrd for Season {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Season {
    fn cmp(&self, other: &Self) -> Ordering {
        self.number
            .cmp(&other.number)
            .then_with(|| self.path.cmp(&other.path))
    }
}
