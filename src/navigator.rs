use crate::episode::EpisodeMatch;
use crate::library::{LibraryMatcher, TvPath};
use std::path::Path;

/// Direction to move from an episode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    Prev,
    Cur,
    Next,
}

impl Pointer {
    pub const fn offset(self) -> i32 {
        match self {
            Self::Prev => -1,
            Self::Cur => 0,
            Self::Next => 1,
        }
    }
}

/// Finds the previous, current or next episode of a show on disk.
///
/// A single missing episode inside a season is treated as a hole: navigation
/// stops there instead of crossing into the adjacent season. Two or more
/// consecutive missing episodes read as the end of the season.
#[derive(Debug, Clone)]
pub struct EpisodeNavigator<P: TvPath> {
    library: LibraryMatcher<P>,
}

impl<P: TvPath> EpisodeNavigator<P> {
    pub fn new(library: LibraryMatcher<P>) -> Self {
        Self { library }
    }

    /// Episode `pointer` away from `episode`. Multi-episode files are
    /// navigated from their first or last episode; an episode missing on
    /// disk is navigated as if it were a single episode.
    pub fn navigate(&self, episode: &EpisodeMatch, pointer: Pointer) -> Option<EpisodeMatch> {
        let show = episode.show()?;
        let season = u32::try_from(episode.season).ok()?;
        let mut range = episode.episodes_as_range();

        let Some(episodes_path) = self.library.library().episodes_path(show, season) else {
            let before_first = range.start <= 1;
            return if pointer == Pointer::Prev && before_first {
                self.navigate_season(episode, pointer)
            } else {
                None
            };
        };

        let bound_of = |start: u32, end: u32| if pointer == Pointer::Next { end } else { start };
        let mut bound = bound_of(range.start, range.end);
        if let Some(current) = self.library.match_episode_in(&episodes_path, bound) {
            range = current.episodes_as_range();
            bound = bound_of(range.start, range.end);
        }

        let found = self.probe(&episodes_path, bound, pointer.offset());
        if found.is_some() || pointer == Pointer::Cur {
            return found;
        }

        if self.probe(&episodes_path, bound, 2 * pointer.offset()).is_some() {
            tracing::debug!(
                "Episode {} of {} season {} is missing",
                bound.saturating_add_signed(pointer.offset()),
                show,
                season
            );
            return None;
        }

        self.navigate_season(episode, pointer)
    }

    /// First episode of the next season or last episode of the previous one
    pub fn navigate_season(
        &self,
        episode: &EpisodeMatch,
        pointer: Pointer,
    ) -> Option<EpisodeMatch> {
        let show = episode.show()?;
        let season = u32::try_from(episode.season.checked_add(pointer.offset())?).ok()?;
        let episodes_path = self.library.library().episodes_path(show, season)?;
        tracing::debug!("Navigating {:?} into {} season {}", pointer, show, season);

        match pointer {
            Pointer::Prev => self.library.match_largest_episode_in(&episodes_path),
            Pointer::Next => self
                .library
                .match_episode_in(&episodes_path, 0)
                .or_else(|| self.library.match_episode_in(&episodes_path, 1)),
            Pointer::Cur => None,
        }
    }

    fn probe(&self, episodes_path: &Path, bound: u32, offset: i32) -> Option<EpisodeMatch> {
        let target = bound.checked_add_signed(offset)?;
        self.library.match_episode_in(episodes_path, target)
    }
}
