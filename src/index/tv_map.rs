use crate::episode::{EpisodeMatch, NO_SEASON};
use crate::ordering::by_episode;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

type EpisodeIndex = BTreeMap<u32, Arc<EpisodeMatch>>;
type SeasonIndex = BTreeMap<i32, EpisodeIndex>;

/// Show → season → episode number index of episode matches.
///
/// Shows are looked up case-insensitively and reported with the casing first
/// seen. A multi-episode match is stored once per episode number; the first
/// match stored under a number keeps it. Seasons and shows left empty by a
/// removal are dropped.
#[derive(Debug, Clone, Default)]
pub struct TvMap {
    display_names: HashMap<String, String>,
    shows: HashMap<String, SeasonIndex>,
}

impl TvMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_episodes(episodes: impl IntoIterator<Item = EpisodeMatch>) -> Self {
        let mut map = Self::new();
        map.add_episodes(episodes);
        map
    }

    /// Index `episode` under each of its episode numbers.
    /// Returns false if it has no show or no episode numbers.
    pub fn add_episode(&mut self, episode: EpisodeMatch) -> bool {
        let Some(show) = episode.show.clone() else {
            tracing::debug!("Not indexing {} without a show", episode);
            return false;
        };
        if episode.episodes.is_empty() {
            return false;
        }

        let key = show.to_lowercase();
        self.display_names.entry(key.clone()).or_insert(show);
        let season = self
            .shows
            .entry(key)
            .or_default()
            .entry(episode.season)
            .or_default();

        let numbers = episode.episodes.clone();
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

    pub fn contains(&self, show: &str, season: i32, episode: u32) -> bool {
        self.episode(show, season, episode).is_some()
    }

    /// True if the first episode number of `episode` is indexed
    pub fn contains_match(&self, episode: &EpisodeMatch) -> bool {
        episode
            .show()
            .is_some_and(|show| self.contains(show, episode.season, episode.episode()))
    }

    pub fn contains_show(&self, show: &str) -> bool {
        self.shows.contains_key(&show.to_lowercase())
    }

    pub fn contains_season(&self, show: &str, season: i32) -> bool {
        self.seasons_of(show)
            .is_some_and(|seasons| seasons.contains_key(&season))
    }

    /// Show names as first indexed, sorted
    pub fn shows(&self) -> Vec<&str> {
        let mut shows: Vec<&str> = self.display_names.values().map(String::as_str).collect();
        shows.sort_unstable();
        shows
    }

    pub fn seasons(&self, show: &str) -> Vec<i32> {
        self.seasons_of(show)
            .map(|seasons| seasons.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Distinct matches of `show`, sorted by season and episode
    pub fn episodes(&self, show: &str) -> Vec<Arc<EpisodeMatch>> {
        let all = self
            .seasons_of(show)
            .into_iter()
            .flat_map(BTreeMap::values)
            .flat_map(BTreeMap::values);
        distinct_sorted(all)
    }

    /// Distinct matches of one season, sorted by episode
    pub fn season_episodes(&self, show: &str, season: i32) -> Vec<Arc<EpisodeMatch>> {
        let all = self
            .seasons_of(show)
            .and_then(|seasons| seasons.get(&season))
            .into_iter()
            .flat_map(BTreeMap::values);
        distinct_sorted(all)
    }

    pub fn episode(&self, show: &str, season: i32, episode: u32) -> Option<&Arc<EpisodeMatch>> {
        self.seasons_of(show)?.get(&season)?.get(&episode)
    }

    pub fn show_count(&self) -> usize {
        self.shows.len()
    }

    /// Number of non-empty seasons of `show`, the season-less bucket only
    /// counted when `include_no_season` is set
    pub fn season_count(&self, show: &str, include_no_season: bool) -> usize {
        self.seasons_of(show).map_or(0, |seasons| {
            seasons
                .iter()
                .filter(|(season, episodes)| {
                    (include_no_season || **season != NO_SEASON) && !episodes.is_empty()
                })
                .count()
        })
    }

    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }

    pub fn replace_episode(&mut self, old: &EpisodeMatch, replacement: EpisodeMatch) {
        self.remove_episode(old);
        self.add_episode(replacement);
    }

    /// Remove each match as a subset, see [`remove_episode_subset`](Self::remove_episode_subset)
    pub fn remove_all<'a>(&mut self, episodes: impl IntoIterator<Item = &'a EpisodeMatch>) {
        for episode in episodes {
            self.remove_episode_subset(episode);
        }
    }

    pub fn remove_season(&mut self, show: &str, season: i32) {
        let key = show.to_lowercase();
        if let Some(seasons) = self.shows.get_mut(&key) {
            seasons.remove(&season);
            self.compact(&key);
        }
    }

    pub fn remove_show(&mut self, show: &str) {
        let key = show.to_lowercase();
        self.shows.remove(&key);
        self.display_names.remove(&key);
    }

    /// If the first episode number of `episode` is indexed, remove every
    /// episode number of `episode` from its season.
    pub fn remove_episode(&mut self, episode: &EpisodeMatch) {
        if !self.contains_match(episode) {
            return;
        }
        let Some(key) = episode.show().map(str::to_lowercase) else {
            return;
        };
        if let Some(numbers) = self
            .shows
            .get_mut(&key)
            .and_then(|seasons| seasons.get_mut(&episode.season))
        {
            for number in &episode.episodes {
                numbers.remove(number);
            }
        }
        self.compact(&key);
    }

    /// Remove only the episode numbers of `partial`. A stored multi-episode
    /// match loses those numbers and stays indexed under the rest.
    pub fn remove_episode_subset(&mut self, partial: &EpisodeMatch) {
        let Some(show) = partial.show() else {
            return;
        };
        for number in &partial.episodes {
            let Some(stored) = self.episode(show, partial.season, *number).cloned() else {
                continue;
            };
            self.remove_episode(&stored);

            let mut remaining = (*stored).clone();
            if let Some(index) = remaining.episodes.iter().position(|n| n == number) {
                remaining.episodes.remove(index);
            }
            if !remaining.episodes.is_empty() {
                self.add_episode(remaining);
            }
        }
    }

    fn seasons_of(&self, show: &str) -> Option<&SeasonIndex> {
        self.shows.get(&show.to_lowercase())
    }

    /// Drop empty seasons of `key`, then the show itself if nothing is left
    fn compact(&mut self, key: &str) {
        let Some(seasons) = self.shows.get_mut(key) else {
            return;
        };
        seasons.retain(|_, episodes| !episodes.is_empty());
        if seasons.is_empty() {
            self.shows.remove(key);
            self.display_names.remove(key);
        }
    }
}

fn distinct_sorted<'a>(
    episodes: impl Iterator<Item = &'a Arc<EpisodeMatch>>,
) -> Vec<Arc<EpisodeMatch>> {
    let mut seen = HashSet::new();
    let mut distinct: Vec<Arc<EpisodeMatch>> = episodes
        .filter(|episode| seen.insert(Arc::clone(episode)))
        .cloned()
        .collect();
    distinct.sort_by(|a, b| by_episode(a, b));
    distinct
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multi(show: &str, season: i32, episodes: &[u32]) -> EpisodeMatch {
        EpisodeMatch::new(Some(show.to_string()), season, episodes.to_vec())
    }

    fn assert_invariant(map: &TvMap) {
        for show in map.shows() {
            for season in map.seasons(show) {
                let stored = map.season_episodes(show, season);
                assert!(!stored.is_empty(), "{show} season {season} is empty");
                for episode in stored {
                    for &number in &episode.episodes {
                        assert!(map.contains(show, season, number));
                    }
                }
            }
        }
    }

    #[test]
    fn test_add_and_lookup() {
        let mut map = TvMap::new();
        assert!(map.add_episode(EpisodeMatch::for_show("Scrubs", 1, 1)));
        assert!(map.add_episode(multi("Scrubs", 1, &[2, 3])));

        assert!(map.contains("scrubs", 1, 1));
        assert!(map.contains("SCRUBS", 1, 3));
        assert!(!map.contains("Scrubs", 1, 4));
        assert_eq!(map.episode("Scrubs", 1, 3).unwrap().episodes, vec![2, 3]);
        assert!(Arc::ptr_eq(
            map.episode("Scrubs", 1, 2).unwrap(),
            map.episode("Scrubs", 1, 3).unwrap()
        ));
        assert_invariant(&map);
    }

    #[test]
    fn test_rejects_incomplete_matches() {
        let mut map = TvMap::new();
        assert!(!map.add_episode(EpisodeMatch::without_show(1, 1)));
        assert!(!map.add_episode(EpisodeMatch::new(Some("Scrubs".to_string()), 1, vec![])));
        assert!(map.is_empty());
    }

    #[test]
    fn test_first_writer_wins() {
        let mut map = TvMap::new();
        map.add_episode(EpisodeMatch::for_show("Scrubs", 1, 2).with_file("a.mkv"));
        map.add_episode(multi("Scrubs", 1, &[2, 3]).with_file("b.mkv"));

        assert_eq!(map.episode("Scrubs", 1, 2).unwrap().episodes, vec![2]);
        assert_eq!(map.episode("Scrubs", 1, 3).unwrap().episodes, vec![2, 3]);
    }

    #[test]
    fn test_show_casing() {
        let mut map = TvMap::new();
        map.add_episode(EpisodeMatch::for_show("The Office (US)", 1, 1));
        map.add_episode(EpisodeMatch::for_show("the office (us)", 1, 2));
        map.add_episode(EpisodeMatch::for_show("Friends", 1, 1));

        assert_eq!(map.shows(), vec!["Friends", "The Office (US)"]);
        assert_eq!(map.show_count(), 2);
        assert!(map.contains_show("THE OFFICE (US)"));
    }

    #[test]
    fn test_episodes_distinct_and_sorted() {
        let map = TvMap::from_episodes([
            EpisodeMatch::for_show("Scrubs", 2, 1),
            multi("Scrubs", 1, &[2, 3]),
            EpisodeMatch::for_show("Scrubs", 1, 1),
        ]);
        let episodes = map.episodes("Scrubs");
        let keys: Vec<(i32, Vec<u32>)> = episodes
            .iter()
            .map(|e| (e.season, e.episodes.clone()))
            .collect();
        assert_eq!(keys, vec![(1, vec![1]), (1, vec![2, 3]), (2, vec![1])]);
        assert_eq!(map.season_episodes("Scrubs", 1).len(), 2);
        assert!(map.episodes("Lost").is_empty());
    }

    #[test]
    fn test_season_count() {
        let map = TvMap::from_episodes([
            EpisodeMatch::for_show("The Pacific", NO_SEASON, 1),
            EpisodeMatch::for_show("The Pacific", 1, 1),
            EpisodeMatch::for_show("The Pacific", 2, 1),
        ]);
        assert_eq!(map.season_count("The Pacific", false), 2);
        assert_eq!(map.season_count("The Pacific", true), 3);
        assert_eq!(map.season_count("Lost", true), 0);
        assert_eq!(map.seasons("the pacific"), vec![NO_SEASON, 1, 2]);
        assert!(map.contains_season("The Pacific", 2));
        assert!(!map.contains_season("The Pacific", 3));
    }

    #[test]
    fn test_remove_episode_subset() {
        let mut map = TvMap::from_episodes([multi("Scrubs", 1, &[1, 2, 3])]);
        map.remove_episode_subset(&EpisodeMatch::for_show("Scrubs", 1, 2));

        assert!(!map.contains("Scrubs", 1, 2));
        assert_eq!(map.episode("Scrubs", 1, 1).unwrap().episodes, vec![1, 3]);
        assert_eq!(map.episode("Scrubs", 1, 3).unwrap().episodes, vec![1, 3]);
        assert_invariant(&map);
    }

    #[test]
    fn test_remove_all_prunes() {
        let mut map = TvMap::from_episodes([
            multi("Scrubs", 1, &[1, 2]),
            EpisodeMatch::for_show("Friends", 1, 1),
        ]);
        map.remove_all(&[
            EpisodeMatch::for_show("Scrubs", 1, 1),
            EpisodeMatch::for_show("Scrubs", 1, 2),
        ]);

        assert!(!map.contains_show("Scrubs"));
        assert_eq!(map.shows(), vec!["Friends"]);
        assert_invariant(&map);
    }

    #[test]
    fn test_remove_episode() {
        let mut map = TvMap::from_episodes([
            multi("Scrubs", 1, &[1, 2]),
            EpisodeMatch::for_show("Scrubs", 2, 1),
        ]);

        map.remove_episode(&EpisodeMatch::for_show("Scrubs", 1, 5));
        assert!(map.contains("Scrubs", 1, 1));

        map.remove_episode(&multi("Scrubs", 1, &[1, 2]));
        assert!(!map.contains_season("Scrubs", 1));
        assert!(map.contains_season("Scrubs", 2));

        map.remove_episode(&EpisodeMatch::for_show("Scrubs", 2, 1));
        assert!(map.is_empty());
        assert!(map.shows().is_empty());
    }

    #[test]
    fn test_replace_episode() {
        let mut map =
            TvMap::from_episodes([EpisodeMatch::for_show("Scrubs", 1, 1).with_file("old.mkv")]);
        map.replace_episode(
            &EpisodeMatch::for_show("Scrubs", 1, 1),
            EpisodeMatch::for_show("Scrubs", 1, 1).with_file("new.mkv"),
        );
        let stored = map.episode("Scrubs", 1, 1).unwrap();
        assert_eq!(stored.file.as_deref(), Some(std::path::Path::new("new.mkv")));
    }

    #[test]
    fn test_remove_season_and_show() {
        let mut map = TvMap::from_episodes([
            EpisodeMatch::for_show("Scrubs", 1, 1),
            EpisodeMatch::for_show("Scrubs", 2, 1),
            EpisodeMatch::for_show("Friends", 1, 1),
        ]);
        map.remove_season("scrubs", 1);
        assert_eq!(map.seasons("Scrubs"), vec![2]);
        map.remove_season("Scrubs", 2);
        assert!(!map.contains_show("Scrubs"));

        map.remove_show("FRIENDS");
        assert!(map.is_empty());
    }
}
