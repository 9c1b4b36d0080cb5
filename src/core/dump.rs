//! Scratch JSON dumps of an xPT computation, for inspecting provider data.
//!
//! Dumps are written on request only and never read back.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::commands::xpt::XptCalculation;

/// Default directory: ~/.cache/nba-xpt/dumps
pub fn default_dump_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("nba-xpt").join("dumps")
}

/// `xpt_<player-id>_<season>_<type>[_<date>].json`
///
/// Only digits and `-` of the season key reach the file name, so the
/// dump always lands directly inside the chosen directory.
pub fn dump_file_name(calc: &XptCalculation) -> String {
    let season: String = calc
        .season
        .as_str()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();
    let mut name = format!(
        "xpt_{}_{}_{}",
        calc.player.id,
        season,
        calc.season_type.slug()
    );
    if let Some(date) = calc.game_date {
        name.push('_');
        name.push_str(&date.to_string());
    }
    name.push_str(".json");
    name
}

/// Write a string to file, creating parent directories.
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Write the full calculation as pretty JSON under `dir`; returns the path.
pub fn write_breakdown_dump(dir: &Path, calc: &XptCalculation) -> std::io::Result<PathBuf> {
    let path = dir.join(dump_file_name(calc));
    let json = serde_json::to_string_pretty(calc)?;
    write_string(&path, &json)?;
    Ok(path)
}
