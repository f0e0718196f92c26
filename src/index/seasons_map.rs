use crate::episode::{EpisodeMatch, NO_SEASON};
use crate::ordering::by_episode_no;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Season → episode number index for a single show
#[derive(Debug, Clone, Default)]
pub struct SeasonsMap {
    seasons: BTreeMap<i32, BTreeMap<u32, Arc<EpisodeMatch>>>,
}

impl SeasonsMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_episodes(episodes: impl IntoIterator<Item = EpisodeMatch>) -> Self {
        let mut map = Self::new();
        map.add_episodes(episodes);
        map
    }

    /// Index `episode` under each of its episode numbers, keeping any match
    /// already stored under a number. Returns false for a match without
    /// episode numbers.
    pub fn add_episode(&mut self, episode: EpisodeMatch) -> bool {
        if episode.episodes.is_empty() {
            return false;
        }
        let numbers = episode.episodes.clone();
        let season = self.seasons.entry(episode.season).or_default();
        let shared = Arc::new(episode);
        for number in numbers {
            season.entry(number).or_insert_with(|| Arc::clone(&shared));
        }
        true
    }

    pub fn add_episodes(&mut self, episodes: impl IntoIterator<Item = EpisodeMatch>) {
        for episode in episodes {
            self.add_episode(episode);
        }
    }

    pub fn contains_season(&self, season: i32) -> bool {
        self.seasons.contains_key(&season)
    }

    pub fn seasons(&self) -> Vec<i32> {
        self.seasons.keys().copied().collect()
    }

    /// Matches of `season` ordered by episode number, one per distinct
    /// episode range. `None` if the season is not indexed.
    pub fn season_episodes(&self, season: i32) -> Option<Vec<Arc<EpisodeMatch>>> {
        let mut episodes: Vec<Arc<EpisodeMatch>> =
            self.seasons.get(&season)?.values().cloned().collect();
        episodes.sort_by(|a, b| by_episode_no(a, b));
        episodes.dedup_by(|a, b| by_episode_no(a, b) == Ordering::Equal);
        Some(episodes)
    }

    pub fn season_count(&self, include_no_season: bool) -> usize {
        let count = self.seasons.len();
        if !include_no_season && self.contains_season(NO_SEASON) {
            count - 1
        } else {
            count
        }
    }

    pub fn remove_season(&mut self, season: i32) {
        self.seasons.remove(&season);
    }
}
