mod no_delimiter;
mod part;
mod se_delimited;
mod word_delimited;
mod x_delimited;

use crate::episode::EpisodeMatch;
use crate::resolver::ResolutionOptions;
use lazy_regex::{Regex, regex};
use regex::Match;
use std::borrow::Cow;
use std::path::Path;
use std::str::FromStr;

/// File name pieces handed to every strategy
#[derive(Debug, Clone)]
pub struct MatchInput<'a> {
    pub path: &'a Path,
    /// Last path component as found on disk
    pub file_name: Cow<'a, str>,
    /// File name with quality and codec tags removed
    pub normalized: String,
}

impl<'a> MatchInput<'a> {
    pub fn new(path: &'a Path) -> Self {
        let file_name = path
            .file_name()
            .map_or(Cow::Borrowed(""), |name| name.to_string_lossy());
        let normalized = normalize(&file_name);
        Self {
            path,
            file_name,
            normalized,
        }
    }
}

/// Remove resolution, video codec and audio tags that would otherwise be
/// read as episode numbers.
pub fn normalize(file_name: &str) -> String {
    let tags: &Regex = regex!(
        r"(?i)(?:720|480|1080)[ip]|[hx][_\-. +]*264|dd[_\-. +]?[257][_\-. +]*[01]|ac3|aac[_\-. +]*(?:[257][_\-. +]*[01])*"
    );
    tags.replace_all(file_name, "").into_owned()
}

/// File name layouts, tried in `CASCADE` order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// `Show.S01E02E03`
    SeDelimited,
    /// `Show 1x02x03`
    XDelimited,
    /// `Show Season 1 Episode 2`, `Show - e1e2`
    WordDelimited,
    /// `Show - 102`
    NoDelimiter,
    /// `Show Pt. II`, `Show Part 2`
    Part,
}

impl Strategy {
    pub const CASCADE: [Self; 5] = [
        Self::SeDelimited,
        Self::XDelimited,
        Self::WordDelimited,
        Self::NoDelimiter,
        Self::Part,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::SeDelimited => "se_delimited",
            Self::XDelimited => "x_delimited",
            Self::WordDelimited => "word_delimited",
            Self::NoDelimiter => "no_delimiter",
            Self::Part => "part",
        }
    }

    pub fn apply(
        self,
        input: &MatchInput<'_>,
        options: &ResolutionOptions,
    ) -> Option<EpisodeMatch> {
        match self {
            Self::SeDelimited => se_delimited::apply(input, options),
            Self::XDelimited => x_delimited::apply(input, options),
            Self::WordDelimited => word_delimited::apply(input, options),
            Self::NoDelimiter => no_delimiter::apply(input, options),
            Self::Part => part::apply(input, options),
        }
    }
}

fn parse_group<T: FromStr>(group: Option<Match<'_>>) -> Option<T> {
    group?.as_str().parse().ok()
}

/// Parse an optional season group. An absent group is `Some(None)`; a group
/// that is present but not a number fails the whole match.
fn parse_season(group: Option<Match<'_>>) -> Option<Option<i32>> {
    match group {
        Some(m) => m.as_str().parse().ok().map(Some),
        None => Some(None),
    }
}
