use super::MatchInput;
use crate::episode::EpisodeMatch;
use crate::resolver::ResolutionOptions;
use lazy_regex::{Regex, regex};

pub(super) fn apply(input: &MatchInput<'_>, options: &ResolutionOptions) -> Option<EpisodeMatch> {
    let re: &Regex = regex!(r"(?i)(?:pt|part)(?:[_\-. +]+([MDCLXVI]+)|[_\-. +]*(\d+))");

    let mut episodes = Vec::new();
    for caps in re.captures_iter(&input.normalized) {
        let episode = match (caps.get(1), caps.get(2)) {
            (Some(roman), None) => from_roman(roman.as_str()),
            (None, Some(digits)) => digits.as_str().parse().ok(),
            _ => None,
        };
        episodes.extend(episode);
    }
    if episodes.is_empty() {
        return None;
    }

    let show_re: &Regex = regex!(
        r"(?i)^(.*?)[_\-. +]*(?:pt|part)(?:[_\-. +]+([MDCLXVI]+)|[_\-. +]*(\d+))"
    );
    let capture = show_re
        .captures(&input.file_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str());
    let show = options.resolve_show(input.path, capture);
    // Part numbering carries no season, only resolvers can supply one
    let season = options.resolve_season(input.path, None);

    Some(EpisodeMatch::new(show, season, episodes))
}

/// Value of a well formed roman numeral, `None` for malformed numerals
fn from_roman(numeral: &str) -> Option<u32> {
    let strict: &Regex =
        regex!(r"(?i)^M{0,4}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$");
    if !strict.is_match(numeral) {
        return None;
    }

    let values: Vec<u32> = numeral
        .chars()
        .map(|c| match c.to_ascii_uppercase() {
            'M' => 1000,
            'D' => 500,
            'C' => 100,
            'L' => 50,
            'X' => 10,
            'V' => 5,
            _ => 1,
        })
        .collect();

    let total: i64 = values
        .iter()
        .enumerate()
        .map(|(i, &value)| match values.get(i + 1) {
            Some(&next) if next > value => -i64::from(value),
            _ => i64::from(value),
        })
        .sum();
    u32::try_from(total).ok().filter(|&n| n > 0)
}
