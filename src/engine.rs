use crate::episode::EpisodeMatch;
use crate::error::{AppError, Result};
use crate::matchers::{MatchInput, Strategy};
use crate::resolver::ResolutionOptions;
use std::fmt;
use std::path::Path;

/// Element a caller requires to be present in a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchElement {
    Show,
    Season,
    All,
}

impl MatchElement {
    const fn requires_show(self) -> bool {
        matches!(self, Self::Show | Self::All)
    }

    const fn requires_season(self) -> bool {
        matches!(self, Self::Season | Self::All)
    }
}

impl fmt::Display for MatchElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Show => write!(f, "Show"),
            Self::Season => write!(f, "Season"),
            Self::All => write!(f, "Show and season"),
        }
    }
}

/// Runs the strategy cascade over a file name
#[derive(Debug, Clone, Default)]
pub struct TvMatcher {
    options: ResolutionOptions,
}

impl TvMatcher {
    pub fn new(options: ResolutionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ResolutionOptions {
        &self.options
    }

    /// Match the last component of `path`. The first strategy producing a
    /// match wins.
    pub fn match_path(&self, path: &Path) -> Option<EpisodeMatch> {
        let input = MatchInput::new(path);
        let (strategy, episode) = Strategy::CASCADE
            .iter()
            .find_map(|&strategy| strategy.apply(&input, &self.options).map(|m| (strategy, m)))?;

        tracing::debug!(
            "Matched {} as {} ({:?}) using {}",
            path.display(),
            episode,
            episode.show,
            strategy.name()
        );
        Some(episode.with_file(path))
    }

    /// Like [`match_path`](Self::match_path) but `None` when a required
    /// element is missing.
    pub fn match_element(&self, path: &Path, required: MatchElement) -> Option<EpisodeMatch> {
        let episode = self.match_path(path)?;
        missing_element(&episode, required).is_none().then_some(episode)
    }

    /// `Ok(None)` when nothing matched, an error when a required element is
    /// missing.
    pub fn match_element_or_throw(
        &self,
        path: &Path,
        required: MatchElement,
    ) -> Result<Option<EpisodeMatch>> {
        let Some(episode) = self.match_path(path) else {
            return Ok(None);
        };
        if let Some(element) = missing_element(&episode, required) {
            return Err(AppError::MatchElementNotFound {
                element,
                path: path.to_path_buf(),
            });
        }
        Ok(Some(episode))
    }

    pub fn match_or_throw(&self, path: &Path, required: MatchElement) -> Result<EpisodeMatch> {
        self.match_element_or_throw(path, required)?
            .ok_or_else(|| AppError::MatchNotFound {
                path: path.to_path_buf(),
            })
    }
}

fn missing_element(episode: &EpisodeMatch, required: MatchElement) -> Option<MatchElement> {
    if required.requires_show() && episode.show.is_none() {
        return Some(MatchElement::Show);
    }
    if required.requires_season() && !episode.has_season() {
        return Some(MatchElement::Season);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::episode::NO_SEASON;
    use crate::resolver::DirectoryResolver;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn named(show: &str, season: i32, episodes: &[u32]) -> EpisodeMatch {
        EpisodeMatch::new(Some(show.to_string()), season, episodes.to_vec())
    }

    fn office() -> EpisodeMatch {
        EpisodeMatch::for_show("The Office (US)", 1, 2)
    }

    #[test]
    fn test_cascade_priority() {
        let matcher = TvMatcher::default();
        let path = Path::new("show.s01e02.720p.mkv");
        let m = matcher.match_path(path).unwrap();
        assert_eq!(m, EpisodeMatch::for_show("Show", 1, 2));
        assert_eq!(m.file, Some(PathBuf::from("show.s01e02.720p.mkv")));
    }

    #[test]
    fn test_codec_tags_ignored() {
        let matcher = TvMatcher::default();
        let m = matcher
            .match_path(Path::new("Modern.Family.S05E17.720p.DD5.1.AAC2.0.H.264.mkv"))
            .unwrap();
        assert_eq!(m, EpisodeMatch::for_show("Modern Family", 5, 17));
    }

    #[test]
    fn test_each_layout() {
        let matcher = TvMatcher::default();
        let cases = [
            ("the.league.s01e01e02.pilot.mkv", named("The League", 1, &[1, 2])),
            ("the.league 1x1x2x3x4 pilot.mkv", named("The League", 1, &[1, 2, 3, 4])),
            ("the_league - e1e2 - name.mkv", named("The League", NO_SEASON, &[1, 2])),
            ("the.league - 102 - pilot.mkv", named("The League", 1, &[2])),
            ("the.pacific.pt.v.pt.vi.name.mkv", named("The Pacific", NO_SEASON, &[5, 6])),
        ];
        for (file_name, expected) in cases {
            assert_eq!(
                matcher.match_path(Path::new(file_name)),
                Some(expected),
                "{file_name}"
            );
        }
    }

    #[test]
    fn test_fallback_both() {
        let options = ResolutionOptions::new().fallback(Arc::new(DirectoryResolver::new()));
        let matcher = TvMatcher::new(options);
        let path = Path::new("/TV/The Office (US)/Season 1/pt 2.mkv");
        assert_eq!(matcher.match_path(path), Some(office()));
    }

    #[test]
    fn test_fallback_show() {
        let options = ResolutionOptions::new().fallback_show(Arc::new(DirectoryResolver::new()));
        let matcher = TvMatcher::new(options);
        let path = Path::new("/TV/The Office (US)/Season 1/1x02.mkv");
        assert_eq!(matcher.match_path(path), Some(office()));
    }

    #[test]
    fn test_fallback_to_pattern() {
        let options = ResolutionOptions::new()
            .with_elements(Arc::new(DirectoryResolver::new()))
            .fallback_to_pattern();
        let matcher = TvMatcher::new(options);
        let path = Path::new("/TV/The Office (US) - 1x02.mkv");
        assert_eq!(matcher.match_path(path), Some(office()));
    }

    #[test]
    fn test_season_resolver_with_show_capture() {
        let options = ResolutionOptions::new().with_season(Arc::new(DirectoryResolver::new()));
        let matcher = TvMatcher::new(options);
        let path = Path::new("/TV/The Office (US)/Season 1/The Office (US) - Part 2.mkv");
        assert_eq!(matcher.match_path(path), Some(office()));
    }

    #[test]
    fn test_match_element() {
        let matcher = TvMatcher::default();
        let no_show = Path::new("102.mkv");
        let no_season = Path::new("the.pacific.pt.v.mkv");

        assert!(matcher.match_element(no_show, MatchElement::Season).is_some());
        assert!(matcher.match_element(no_show, MatchElement::Show).is_none());
        assert!(matcher.match_element(no_show, MatchElement::All).is_none());

        assert!(matcher.match_element(no_season, MatchElement::Show).is_some());
        assert!(matcher.match_element(no_season, MatchElement::Season).is_none());
        assert!(matcher.match_element(no_season, MatchElement::All).is_none());
    }

    #[test]
    fn test_match_element_or_throw() {
        let matcher = TvMatcher::default();

        let result = matcher.match_element_or_throw(Path::new("readme.txt"), MatchElement::All);
        assert!(matches!(result, Ok(None)));

        let result = matcher.match_element_or_throw(Path::new("102.mkv"), MatchElement::Show);
        assert!(matches!(
            result,
            Err(AppError::MatchElementNotFound {
                element: MatchElement::Show,
                ..
            })
        ));

        let result =
            matcher.match_element_or_throw(Path::new("the.pacific.pt.v.mkv"), MatchElement::All);
        assert!(matches!(
            result,
            Err(AppError::MatchElementNotFound {
                element: MatchElement::Season,
                ..
            })
        ));
    }

    #[test]
    fn test_match_or_throw() {
        let matcher = TvMatcher::default();

        let err = matcher
            .match_or_throw(Path::new("readme.txt"), MatchElement::Show)
            .unwrap_err();
        assert!(matches!(err, AppError::MatchNotFound { .. }));

        let m = matcher
            .match_or_throw(Path::new("helix.s01e01.pilot.mkv"), MatchElement::All)
            .unwrap();
        assert_eq!(m, EpisodeMatch::for_show("Helix", 1, 1));
    }
}
