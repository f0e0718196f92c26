//! Orderings used to sort episode matches for display and lookups.

use crate::episode::EpisodeMatch;
use std::cmp::Ordering;

/// Orders by show, season and first episode number. The last episode number
/// only breaks ties when either side is a multi-episode match.
pub fn by_episode(a: &EpisodeMatch, b: &EpisodeMatch) -> Ordering {
    let (ra, rb) = (a.episodes_as_range(), b.episodes_as_range());
    a.show
        .cmp(&b.show)
        .then(a.season.cmp(&b.season))
        .then(ra.start.cmp(&rb.start))
        .then_with(|| {
            if a.is_multi_episode() || b.is_multi_episode() {
                ra.end.cmp(&rb.end)
            } else {
                Ordering::Equal
            }
        })
}

/// Orders by first episode number, then last episode number
pub fn by_episode_no(a: &EpisodeMatch, b: &EpisodeMatch) -> Ordering {
    let (ra, rb) = (a.episodes_as_range(), b.episodes_as_range());
    ra.start.cmp(&rb.start).then(ra.end.cmp(&rb.end))
}
