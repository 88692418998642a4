//! Configuration management for wordstats

mod io;
mod run;
mod types;

pub use run::RunConfig;
pub use types::*;

use anyhow::Result;
use std::path::Path;

impl Config {
    /// Load configuration from ~/.config/wordstats/config.toml, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from `path`, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }
}
