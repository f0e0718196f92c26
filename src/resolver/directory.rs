use super::{SeasonResolver, ShowResolver};
use crate::episode::NO_SEASON;
use lazy_regex::{Regex, regex};
use std::path::Path;

/// Resolves show and season from the `<Show>/<Season N>/<file>` layout
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryResolver;

impl DirectoryResolver {
    pub const fn new() -> Self {
        Self
    }

    /// Season number in a directory name such as `Season 2` or `Series 03`
    pub fn season_from_dir_name(name: &str) -> Option<u32> {
        let re: &Regex = regex!(r"(?i)(?:Season|Series) ([0-9]+)");
        re.captures(name)?.get(1)?.as_str().parse().ok()
    }

    fn is_season_dir_name(name: &str) -> bool {
        let re: &Regex = regex!(r"(?i)^(?:Season|Series) ([0-9]+)$");
        re.is_match(name)
    }
}

impl ShowResolver for DirectoryResolver {
    fn resolve_show(&self, path: &Path) -> Option<String> {
        let season_dir = path.parent()?;
        let season_name = season_dir.file_name()?.to_string_lossy();
        if !Self::is_season_dir_name(&season_name) {
            return None;
        }
        let show_dir = season_dir.parent()?;
        Some(show_dir.file_name()?.to_string_lossy().into_owned())
    }

    fn name(&self) -> &'static str {
        "directory"
    }
}

impl SeasonResolver for DirectoryResolver {
    fn resolve_season(&self, path: &Path) -> i32 {
        let season_dir = if path.is_dir() { Some(path) } else { path.parent() };
        season_dir
            .and_then(Path::file_name)
            .and_then(|name| Self::season_from_dir_name(&name.to_string_lossy()))
            .and_then(|season| i32::try_from(season).ok())
            .unwrap_or(NO_SEASON)
    }

    fn name(&self) -> &'static str {
        "directory"
    }
}
