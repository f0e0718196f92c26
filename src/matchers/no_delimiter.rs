use super::{MatchInput, parse_group, parse_season};
use crate::episode::EpisodeMatch;
use crate::resolver::ResolutionOptions;
use lazy_regex::{Regex, regex};

pub(super) fn apply(input: &MatchInput<'_>, options: &ResolutionOptions) -> Option<EpisodeMatch> {
    let re: &Regex = regex!(r"(?i)^(.*)[_\-. +]*(\d+)[_\-. +]*(\d\d)");
    let show_caps = re.captures(&input.normalized)?;
    let show = options
        .resolve_show(input.path, show_caps.get(1).map(|m| m.as_str()))
        .map(|show| trim_separators(&show));

    // Years and dates must not be read as season/episode numbers
    let dates: &Regex = regex!(
        r"(19|20)?\d\d[_\-. +]*\d\d[_\-. +]*\d\d|\d\d[_\-. +]*\d\d[_\-. +]*(19|20)?\d\d[_\-. +]*|(19|20)\d\d"
    );
    let undated = dates.replace_all(&input.normalized, "");
    let caps = re.captures(&undated)?;

    let season = options.resolve_season(input.path, parse_season(caps.get(2))?);
    let episode = parse_group(caps.get(3))?;
    Some(EpisodeMatch::new(show, season, vec![episode]))
}

fn trim_separators(show: &str) -> String {
    let re: &Regex = regex!(r"[_\-. +]*$");
    re.replace(show, "").into_owned()
}
