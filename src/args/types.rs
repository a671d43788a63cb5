use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Course companion service: geofence triggers and handicaps", long_about = None)]
pub struct Args {
    /// TOML file with any of the options below. Command line values win.
    #[arg(long, value_name = "CONFIG_TOML", value_parser = crate::args::validation::check_readable_file)]
    pub config_toml: Option<PathBuf>,
    #[arg(short = 'b', long, value_name = "ADDR:PORT")]
    pub bind: Option<String>,
    /// SQLite file for round state and history. In-memory when omitted.
    #[arg(short = 'n', long, value_name = "DATABASE_PATH")]
    pub db_path: Option<PathBuf>,
    /// Backend URL serving the zone and feature-toggle document.
    #[arg(long, value_name = "URL")]
    pub remote_config_url: Option<String>,
    /// Local JSON file with the zone and feature-toggle document.
    #[arg(long, value_name = "JSON", value_parser = crate::args::validation::check_readable_file)]
    pub remote_config_file: Option<PathBuf>,
    #[arg(long, value_name = "SECONDS")]
    pub poll_secs: Option<u64>,
    /// JSON course layout replacing the built-in fallback data.
    #[arg(long, value_name = "JSON", value_parser = crate::args::validation::check_readable_file)]
    pub course_data: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub bind: Option<String>,
    pub db_path: Option<PathBuf>,
    pub remote_config_url: Option<String>,
    pub remote_config_file: Option<PathBuf>,
    pub poll_secs: Option<u64>,
    pub course_data: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSourceArg {
    Url(String),
    File(PathBuf),
    None,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub bind: String,
    pub db_path: Option<PathBuf>,
    pub remote_config: ConfigSourceArg,
    pub poll_secs: u64,
    pub course_data: Option<PathBuf>,
}
