use super::{MatchInput, parse_group, parse_season};
use crate::episode::EpisodeMatch;
use crate::resolver::ResolutionOptions;
use lazy_regex::{Regex, regex};

pub(super) fn apply(input: &MatchInput<'_>, options: &ResolutionOptions) -> Option<EpisodeMatch> {
    let consecutive: &Regex = regex!(
        r"(?i)(?:season[_\-. +]*(\d+))?[_\-. +]+(?:episode|ep|e)[_\-. +]*(\d+)((?:(?:episode|ep|e)\d+)+)"
    );
    let single: &Regex =
        regex!(r"(?i)(?:season[_\-. +]*(\d+))?[_\-. +]+(?:episode|ep|e)[_\-. +]*(\d+)");

    if let Some(caps) = consecutive.captures(&input.normalized) {
        let mut episodes = vec![parse_group(caps.get(2))?];
        if let Some(rest) = caps.get(3) {
            let extra: &Regex = regex!(r"(?i)(?:episode|ep|e)(\d+)");
            for m in extra.captures_iter(rest.as_str()) {
                episodes.push(parse_group(m.get(1))?);
            }
        }
        let season = options.resolve_season(input.path, parse_season(caps.get(1))?);
        return Some(EpisodeMatch::new(show(input, options), season, episodes));
    }

    let mut hits = single.captures_iter(&input.normalized);
    let first = hits.next()?;
    let mut episodes = vec![parse_group(first.get(2))?];
    for caps in hits {
        episodes.push(parse_group(caps.get(2))?);
    }
    let season = options.resolve_season(input.path, parse_season(first.get(1))?);
    Some(EpisodeMatch::new(show(input, options), season, episodes))
}

/// Show is captured from the file name before tag removal
fn show(input: &MatchInput<'_>, options: &ResolutionOptions) -> Option<String> {
    let re: &Regex = regex!(
        r"(?i)^(.*?)[_\-. +]*(?:season[_\-. +]*(\d+))?[_\-. +]+(?:episode|ep|e)[_\-. +]*(\d+)"
    );
    let capture = re
        .captures(&input.file_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str());
    options.resolve_show(input.path, capture)
}
