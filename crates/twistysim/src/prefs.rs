//! User preferences.

use std::path::{Path, PathBuf};

use eyre::{OptionExt, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");
const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const PREFS_FILE_NAME: &str = "prefs.yaml";

/// Output format for command results.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// User preferences, overridden by command-line flags.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub(crate) struct Prefs {
    pub strict: bool,
    pub output: OutputFormat,
    pub default_event: String,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            strict: false,
            output: OutputFormat::Text,
            default_event: "333".to_owned(),
        }
    }
}

/// Returns the path of the user preferences file.
pub(crate) fn prefs_file() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "Twistysim")
        .ok_or_eyre("unable to locate home directory")?;
    Ok(dirs.config_dir().join(PREFS_FILE_NAME))
}

impl Prefs {
    /// Loads preferences, layering the user file at `path` (or the default
    /// location) over the built-in defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));

        let user_path = match path {
            Some(p) => Ok(p.to_owned()),
            None => prefs_file(),
        };
        match user_path {
            Ok(p) => {
                log::debug!("loading preferences from {}", p.display());
                // An explicitly requested file must exist.
                let source = config::File::from(p).required(path.is_some());
                config = config.add_source(source);
            }
            Err(e) => log::warn!("Error locating user preferences: {e}"),
        }

        config
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap_or_else(|e| {
                log::warn!("Error loading preferences: {e}");
                Self::default()
            })
    }
}
