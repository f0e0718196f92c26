mod episodes;
mod standard;

pub use episodes::{EpisodeRange, LibraryMatcher};
pub use standard::StandardLibrary;

use crate::episode::Season;
use crate::error::{AppError, Result};
use crate::resolver::DirectoryResolver;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// File extensions treated as episodes
pub const VIDEO_EXTENSIONS: [&str; 6] = ["mkv", "mp4", "avi", "mpg", "mpeg", "mov"];

/// Season directory naming conventions, in lookup order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonFormat {
    Season,
    SeasonPadded,
    Series,
    SeriesPadded,
}

impl SeasonFormat {
    pub const ALL: [Self; 4] = [
        Self::Season,
        Self::SeasonPadded,
        Self::Series,
        Self::SeriesPadded,
    ];

    pub fn format(self, season: u32) -> String {
        match self {
            Self::Season => format!("Season {season}"),
            Self::SeasonPadded => format!("Season {season:02}"),
            Self::Series => format!("Series {season}"),
            Self::SeriesPadded => format!("Series {season:02}"),
        }
    }
}

/// Layout of a TV library on disk: where a show's seasons live and where a
/// season's episodes live.
pub trait TvPath: Send + Sync {
    /// Directory holding the season directories of `show`
    fn seasons_path(&self, show: &str) -> Option<PathBuf>;

    /// Directory holding the episodes of `show` season `season`
    fn episodes_path(&self, show: &str, season: u32) -> Option<PathBuf>;

    fn season(&self, show: &str, season: u32) -> Result<Season> {
        self.episodes_path(show, season)
            .map(|path| Season::new(season, path))
            .ok_or_else(|| AppError::EpisodesPathNotFound {
                show: show.to_string(),
                season,
            })
    }

    /// Season directories of `show`, sorted by season number
    fn list_seasons(&self, show: &str) -> Result<Vec<Season>> {
        let seasons_path = self
            .seasons_path(show)
            .ok_or_else(|| AppError::SeasonsPathNotFound {
                show: show.to_string(),
            })?;

        let mut seasons: Vec<Season> = list_dirs(&seasons_path)
            .into_iter()
            .filter_map(|dir| {
                let name = dir.file_name()?.to_string_lossy().into_owned();
                let number = DirectoryResolver::season_from_dir_name(&name)?;
                Some(Season::new(number, dir))
            })
            .collect();
        seasons.sort();
        Ok(seasons)
    }

    /// Video files of `show` season `season`
    fn list_episode_paths(&self, show: &str, season: u32) -> Result<Vec<PathBuf>> {
        let season = self.season(show, season)?;
        Ok(self.list_paths(&season.path))
    }

    /// Video files directly inside `dir`, sorted. Unreadable directories
    /// yield no files.
    fn list_paths(&self, dir: &Path) -> Vec<PathBuf> {
        list_videos(dir)
    }
}

pub fn is_video_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .is_some_and(|name| {
            VIDEO_EXTENSIONS
                .iter()
                .any(|ext| name.ends_with(&format!(".{ext}")))
        })
}

/// Entries below `root` up to `max_depth`, excluding `root` itself.
/// Unreadable entries are logged and skipped.
fn walk(root: &Path, max_depth: usize) -> impl Iterator<Item = DirEntry> + '_ {
    WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(false)
        .into_iter()
        .filter_map(move |e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!("Skipping unreadable entry under {}: {}", root.display(), err);
                None
            }
        })
}

fn list_videos(dir: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = walk(dir, 1)
        .filter(|entry| entry.file_type().is_file() && is_video_file(entry.path()))
        .map(DirEntry::into_path)
        .collect();
    paths.sort();
    paths
}

fn list_dirs(dir: &Path) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = walk(dir, 1)
        .filter(|entry| entry.file_type().is_dir())
        .map(DirEntry::into_path)
        .collect();
    dirs.sort();
    dirs
}

/// Collect video files below `root`, sorted
pub fn scan_videos(root: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut paths: Vec<PathBuf> = walk(root, max_depth)
        .filter(|entry| entry.file_type().is_file() && is_video_file(entry.path()))
        .map(DirEntry::into_path)
        .collect();

    paths.sort();
    tracing::debug!("Found {} video files under {}", paths.len(), root.display());
    Ok(paths)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    pub const SHOWS: [&str; 5] = [
        "Scrubs",
        "Friends",
        "Modern Family",
        "The Office (US)",
        "It's Always Sunny In Philadelphia",
    ];

    pub fn create_test_file(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"").unwrap();
    }

    /// Library with three seasons of twelve episodes per show, plus a
    /// first season of The Walking Dead containing multi-episode files.
    pub fn create_library() -> TempDir {
        let temp = TempDir::new().unwrap();
        for show in SHOWS {
            for season in 1..=3 {
                let season_dir = temp.path().join(show).join(format!("Season {season}"));
                for episode in 1..=12 {
                    let name = format!("{show} - {season}x{episode:02}.mkv");
                    create_test_file(&season_dir.join(name));
                }
            }
        }

        let twd = temp.path().join("The Walking Dead").join("Season 1");
        let mut names = vec![
            "The Walking Dead - 1x01.mkv".to_string(),
            "The Walking Dead - 1x02x03.mkv".to_string(),
            "The Walking Dead - 1x04.mkv".to_string(),
            "The Walking Dead - 1x05x06.mkv".to_string(),
        ];
        names.extend((7..=12).map(|ep| format!("The Walking Dead - 1x{ep:02}.mkv")));
        for name in names {
            create_test_file(&twd.join(name));
        }

        temp
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{create_library, create_test_file};
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_video_file() {
        assert!(is_video_file(Path::new("/tv/a.mkv")));
        assert!(is_video_file(Path::new("/tv/a.MP4")));
        assert!(is_video_file(Path::new("a.mpeg")));
        assert!(!is_video_file(Path::new("a.srt")));
        assert!(!is_video_file(Path::new("mkv")));
    }

    #[test]
    fn test_season_format() {
        assert_eq!(SeasonFormat::Season.format(2), "Season 2");
        assert_eq!(SeasonFormat::SeasonPadded.format(2), "Season 02");
        assert_eq!(SeasonFormat::Series.format(12), "Series 12");
        assert_eq!(SeasonFormat::SeriesPadded.format(3), "Series 03");
    }

    #[test]
    fn test_scan_videos() {
        let temp = TempDir::new().unwrap();
        create_test_file(&temp.path().join("Show/Season 1/Show - 1x01.mkv"));
        create_test_file(&temp.path().join("Show/Season 1/Show - 1x01.srt"));
        create_test_file(&temp.path().join("loose.s01e01.mp4"));

        let all = scan_videos(temp.path(), true).unwrap();
        assert_eq!(all.len(), 2);

        let top = scan_videos(temp.path(), false).unwrap();
        assert_eq!(top, vec![temp.path().join("loose.s01e01.mp4")]);
    }

    #[test]
    fn test_list_seasons() {
        let temp = create_library();
        let library = StandardLibrary::new(temp.path());
        let seasons = library.list_seasons("Scrubs").unwrap();
        let numbers: Vec<u32> = seasons.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_list_seasons_unknown_show() {
        let temp = create_library();
        let library = StandardLibrary::new(temp.path());
        let err = library.list_seasons("Lost").unwrap_err();
        assert!(matches!(err, AppError::SeasonsPathNotFound { .. }));
    }

    #[test]
    fn test_list_episode_paths() {
        let temp = create_library();
        let library = StandardLibrary::new(temp.path());
        let paths = library.list_episode_paths("Friends", 2).unwrap();
        assert_eq!(paths.len(), 12);
        assert!(paths[0].ends_with("Friends - 2x01.mkv"));

        let err = library.list_episode_paths("Friends", 9).unwrap_err();
        assert!(matches!(err, AppError::EpisodesPathNotFound { season: 9, .. }));
    }

    #[test]
    fn test_list_paths_skips_subdirectories() {
        let temp = TempDir::new().unwrap();
        create_test_file(&temp.path().join("Show - 1x02.mkv"));
        create_test_file(&temp.path().join("Show - 1x01.mkv"));
        create_test_file(&temp.path().join("Show - 1x01.nfo"));
        create_test_file(&temp.path().join("Extras/Show - 1x03.mkv"));

        let library = StandardLibrary::new(temp.path());
        let paths = library.list_paths(temp.path());
        assert_eq!(
            paths,
            vec![
                temp.path().join("Show - 1x01.mkv"),
                temp.path().join("Show - 1x02.mkv"),
            ]
        );
    }

    #[test]
    fn test_list_seasons_ignores_files_and_other_dirs() {
        let temp = create_library();
        create_test_file(&temp.path().join("Scrubs/Season 4.mkv"));
        create_test_file(&temp.path().join("Scrubs/Specials/Scrubs - 0x01.mkv"));

        let library = StandardLibrary::new(temp.path());
        let numbers: Vec<u32> = library
            .list_seasons("Scrubs")
            .unwrap()
            .iter()
            .map(|s| s.number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_scan_videos_missing_root() {
        let temp = TempDir::new().unwrap();
        let paths = scan_videos(&temp.path().join("missing"), true).unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn test_list_paths_missing_dir() {
        let temp = TempDir::new().unwrap();
        let library = StandardLibrary::new(temp.path());
        assert!(library.list_paths(&temp.path().join("missing")).is_empty());
    }
}
