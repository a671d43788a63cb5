pub mod types;
pub mod validation;

pub use types::*;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::fs;

pub const DEFAULT_BIND: &str = "0.0.0.0:8081";
pub const DEFAULT_POLL_SECS: u64 = 60;

/// Parses the command line and merges in the TOML file, if any.
///
/// # Errors
///
/// Returns `Err` if the TOML file cannot be read or the merged options are invalid.
pub fn args_checks() -> Result<CleanArgs> {
    merge(Args::parse())
}

/// Command line over file over defaults.
///
/// # Errors
///
/// Returns `Err` if the TOML file cannot be read or the merged options are invalid.
pub fn merge(cli: Args) -> Result<CleanArgs> {
    let file_config = match cli.config_toml.as_ref() {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("read config toml {}", path.display()))?;
            toml::from_str::<FileConfig>(&contents)
                .with_context(|| format!("parse config toml {}", path.display()))?
        }
        None => FileConfig::default(),
    };

    let bind = cli
        .bind
        .or(file_config.bind)
        .unwrap_or_else(|| DEFAULT_BIND.to_string());
    validation::check_bind_address(&bind).map_err(|e| anyhow!(e))?;

    let url = cli.remote_config_url.or(file_config.remote_config_url);
    let file = cli.remote_config_file.or(file_config.remote_config_file);
    let remote_config = match (url, file) {
        (Some(_), Some(_)) => bail!("use either --remote-config-url or --remote-config-file, not both"),
        (Some(url), None) => ConfigSourceArg::Url(url),
        (None, Some(path)) => ConfigSourceArg::File(path),
        (None, None) => ConfigSourceArg::None,
    };

    let poll_secs = cli
        .poll_secs
        .or(file_config.poll_secs)
        .unwrap_or(DEFAULT_POLL_SECS);
    if poll_secs == 0 {
        bail!("poll_secs must be at least 1");
    }

    Ok(CleanArgs {
        bind,
        db_path: cli.db_path.or(file_config.db_path),
        remote_config,
        poll_secs,
        course_data: cli.course_data.or(file_config.course_data),
    })
}
