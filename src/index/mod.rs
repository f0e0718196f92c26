mod seasons_map;
mod tv_map;

pub use seasons_map::SeasonsMap;
pub use tv_map::TvMap;
