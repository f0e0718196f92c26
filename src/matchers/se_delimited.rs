use super::{MatchInput, parse_group, parse_season};
use crate::episode::EpisodeMatch;
use crate::resolver::ResolutionOptions;
use lazy_regex::{Regex, regex};

pub(super) fn apply(input: &MatchInput<'_>, options: &ResolutionOptions) -> Option<EpisodeMatch> {
    let re: &Regex = regex!(
        r"(?i)^(.*?)[_\-. +]*s(\d+)[_\-. +x]*e(\d+)[_\-. +x]*((?:(?:.*?s\d+[_\-. +x]*)?e\d+[_\-. +x]*)*)"
    );
    let caps = re.captures(&input.normalized)?;

    let show = options.resolve_show(input.path, caps.get(1).map(|m| m.as_str()));
    let season = options.resolve_season(input.path, parse_season(caps.get(2))?);
    let mut episodes = vec![parse_group(caps.get(3))?];
    if let Some(rest) = caps.get(4) {
        episodes.extend(extra_episodes(rest.as_str())?);
    }

    Some(EpisodeMatch::new(show, season, episodes))
}

fn extra_episodes(rest: &str) -> Option<Vec<u32>> {
    let re: &Regex = regex!(r"(?i)(?:s\d+)?[_\-. +x]*e(\d+)");
    re.captures_iter(rest)
        .map(|caps| parse_group(caps.get(1)))
        .collect()
}
