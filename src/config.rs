use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_SHARE_DIR: &str = "shares";
pub const SHARE_DIR_ENV: &str = "KEYSPLIT_SHARE_DIR";

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Config {
    pub share_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            share_dir: PathBuf::from(DEFAULT_SHARE_DIR),
        }
    }
}

impl Config {
    pub fn new(share_dir: impl Into<PathBuf>) -> Self {
        Config {
            share_dir: share_dir.into(),
        }
    }

    /// Defaults, with the share directory taken from `KEYSPLIT_SHARE_DIR` when set.
    pub fn from_env() -> Self {
        match env::var_os(SHARE_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Config::new(dir),
            _ => Config::default(),
        }
    }

    pub fn with_share_dir(mut self, share_dir: Option<&Path>) -> Self {
        if let Some(dir) = share_dir {
            self.share_dir = dir.to_path_buf();
        }
        self
    }
}
