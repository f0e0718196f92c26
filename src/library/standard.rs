use super::{SeasonFormat, TvPath};
use std::path::PathBuf;

/// Library laid out as `<root>/<Show>/<Season N>/<episode>` across one or
/// more roots. The first root holding a show wins.
#[derive(Debug, Clone)]
pub struct StandardLibrary {
    roots: Vec<PathBuf>,
}

impl StandardLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            roots: vec![root.into()],
        }
    }

    pub fn with_roots(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Directories directly under each root, i.e. the shows
    pub fn show_paths(&self) -> Vec<PathBuf> {
        let mut shows: Vec<PathBuf> = self
            .roots
            .iter()
            .filter_map(|root| std::fs::read_dir(root).ok())
            .flatten()
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_dir())
            .collect();
        shows.sort();
        shows
    }
}

impl TvPath for StandardLibrary {
    fn seasons_path(&self, show: &str) -> Option<PathBuf> {
        self.roots
            .iter()
            .map(|root| root.join(show))
            .find(|path| path.is_dir())
    }

    fn episodes_path(&self, show: &str, season: u32) -> Option<PathBuf> {
        let seasons_path = self.seasons_path(show)?;
        SeasonFormat::ALL
            .iter()
            .map(|format| seasons_path.join(format.format(season)))
            .find(|path| path.is_dir())
    }
}
