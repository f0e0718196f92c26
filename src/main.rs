use anyhow::{Context, bail};
use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;
use tvmatch::{
    Cli, Commands, EpisodeMatch, EpisodeMatcher, EpisodeNavigator, LibraryMatcher, MatcherConfig,
    Pointer, RequiredElement, StandardLibrary, TvMap, build_library, build_options,
    default_config_path, scan_videos,
};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);
    let config = cli.config.as_deref();

    let result = match cli.command {
        Commands::Match {
            paths,
            require,
            json,
        } => run_match(config, &paths, require, json),
        Commands::Scan {
            dir,
            no_recursive,
            json,
        } => run_scan(config, &dir, !no_recursive, json),
        Commands::Navigate {
            show,
            season,
            episode,
            direction,
        } => run_navigate(config, &show, season, episode, direction.into()),
        Commands::Latest { show } => run_latest(config, &show),
    };

    if let Err(e) = result {
        tracing::error!("Error: {e:#}");
        process::exit(1);
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// An explicit config file must exist; the default location may be absent.
fn load_config(path: Option<&Path>) -> anyhow::Result<MatcherConfig> {
    let config = match path {
        Some(path) => {
            tracing::debug!("Loading configuration from: {}", path.display());
            MatcherConfig::from_file(path)
        }
        None => MatcherConfig::load_or_default(&default_config_path()),
    };
    config.context("failed to load configuration")
}

fn library_matcher(config: &MatcherConfig) -> anyhow::Result<LibraryMatcher<StandardLibrary>> {
    if config.sources.is_empty() {
        bail!("no library sources configured");
    }
    let matcher = EpisodeMatcher::new(build_options(&config.resolution));
    Ok(LibraryMatcher::new(build_library(config), matcher))
}

fn describe(episode: &EpisodeMatch) -> String {
    match episode.show() {
        Some(show) => format!("{show} {episode}"),
        None => episode.to_string(),
    }
}

fn run_match(
    config_path: Option<&Path>,
    paths: &[PathBuf],
    require: RequiredElement,
    json: bool,
) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let matcher = EpisodeMatcher::new(build_options(&config.resolution));

    let mut matches = Vec::with_capacity(paths.len());
    for path in paths {
        let episode = match require.to_match_element() {
            Some(element) => Some(matcher.matcher().match_or_throw(path, element)?),
            None => matcher.match_path(path),
        };
        matches.push((path, episode));
    }

    if json {
        let results: Vec<_> = matches
            .iter()
            .map(|(path, episode)| MatchOutput {
                path,
                episode: episode.as_ref(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for (path, episode) in &matches {
        match episode {
            Some(episode) => println!("{}\t{}", path.display(), describe(episode)),
            None => println!("{}\t(no match)", path.display()),
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct MatchOutput<'a> {
    path: &'a Path,
    episode: Option<&'a EpisodeMatch>,
}

#[derive(Serialize)]
struct ScanSummary {
    shows: Vec<ShowSummary>,
    unmatched: Vec<PathBuf>,
}

#[derive(Serialize)]
struct ShowSummary {
    show: String,
    seasons: Vec<SeasonSummary>,
}

#[derive(Serialize)]
struct SeasonSummary {
    season: i32,
    episodes: Vec<u32>,
}

fn summarize(map: &TvMap, unmatched: Vec<PathBuf>) -> ScanSummary {
    let shows = map
        .shows()
        .into_iter()
        .map(|show| ShowSummary {
            show: show.to_string(),
            seasons: map
                .seasons(show)
                .into_iter()
                .map(|season| SeasonSummary {
                    season,
                    episodes: map
                        .season_episodes(show, season)
                        .iter()
                        .flat_map(|episode| episode.episodes.iter().copied())
                        .collect(),
                })
                .collect(),
        })
        .collect();

    ScanSummary { shows, unmatched }
}

fn run_scan(
    config_path: Option<&Path>,
    dir: &Path,
    recursive: bool,
    json: bool,
) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let matcher = EpisodeMatcher::new(build_options(&config.resolution));

    let videos = scan_videos(dir, recursive)?;
    tracing::info!("Found {} videos in {}", videos.len(), dir.display());

    let mut map = TvMap::new();
    let mut unmatched = Vec::new();
    for video in videos {
        match matcher.match_path(&video) {
            Some(episode) if episode.show().is_some() => {
                map.add_episode(episode);
            }
            _ => unmatched.push(video),
        }
    }

    tracing::info!(
        "Indexed {} shows, {} files without a show",
        map.show_count(),
        unmatched.len()
    );
    let summary = summarize(&map, unmatched);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    for show in &summary.shows {
        println!("{}", show.show);
        for season in &show.seasons {
            println!("  season {}: {} episodes", season.season, season.episodes.len());
        }
    }
    for path in &summary.unmatched {
        println!("unmatched: {}", path.display());
    }
    Ok(())
}

fn run_navigate(
    config_path: Option<&Path>,
    show: &str,
    season: u32,
    episode: u32,
    pointer: Pointer,
) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let navigator = EpisodeNavigator::new(library_matcher(&config)?);

    let from = EpisodeMatch::for_show(show, i32::try_from(season)?, episode);
    let Some(found) = navigator.navigate(&from, pointer) else {
        bail!("no {pointer:?} episode for {show} {from}");
    };

    match found.file() {
        Some(file) => println!("{}\t{}", describe(&found), file.display()),
        None => println!("{}", describe(&found)),
    }
    Ok(())
}

fn run_latest(config_path: Option<&Path>, show: &str) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let library = library_matcher(&config)?;

    let Some(latest) = library.match_latest_episode(show)? else {
        bail!("no episodes found for {show}");
    };

    match latest.file() {
        Some(file) => println!("{}\t{}", describe(&latest), file.display()),
        None => println!("{}", describe(&latest)),
    }
    Ok(())
}
