//! Runtime configuration read from environment variables.
//!
//! `QUIZ_SETS_DIR` sets the question set directory (default `question_sets`),
//! `QUIZ_SKIN` picks the look (`plain` or `modern`, default `modern`).

use crate::store::DEFAULT_SETS_DIR;
use std::path::PathBuf;
use std::str::FromStr;

pub const SETS_DIR_VAR: &str = "QUIZ_SETS_DIR";
pub const SKIN_VAR: &str = "QUIZ_SKIN";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkinKind {
    Plain,
    #[default]
    Modern,
}

impl FromStr for SkinKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(SkinKind::Plain),
            "modern" => Ok(SkinKind::Modern),
            other => Err(format!("unknown skin '{}'", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub sets_dir: PathBuf,
    pub skin: SkinKind,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sets_dir: PathBuf::from(DEFAULT_SETS_DIR),
            skin: SkinKind::default(),
        }
    }
}

impl AppConfig {
    /// Reads only the variables this app knows about. Values that are not
    /// valid UTF-8 are ignored.
    pub fn from_env() -> Self {
        let vars = [SETS_DIR_VAR, SKIN_VAR]
            .into_iter()
            .filter_map(|key| match std::env::var(key) {
                Ok(value) => Some((key, value)),
                Err(std::env::VarError::NotPresent) => None,
                Err(e) => {
                    log::warn!("{}: {}, using default", key, e);
                    None
                }
            });
        Self::from_vars(vars)
    }

    /// Builds a config from key/value pairs. Unknown skins fall back to the default.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        for (key, value) in vars {
            let value = value.as_ref();
            match key.as_ref() {
                SETS_DIR_VAR if !value.trim().is_empty() => {
                    config.sets_dir = PathBuf::from(value.trim());
                }
                SKIN_VAR => match value.parse() {
                    Ok(skin) => config.skin = skin,
                    Err(e) => log::warn!("{}: {}, using {:?}", SKIN_VAR, e, config.skin),
                },
                _ => {}
            }
        }
        config
    }
}
