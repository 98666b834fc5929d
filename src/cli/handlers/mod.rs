mod init;
mod mutate;
mod query;
mod schema;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::{execute, handle_query};
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::DiceboxConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: DiceboxConfig,
    pub config_path: Option<PathBuf>,
}

impl CommandContext {
    /// Load the explicit config file, or discover one upward from `cwd`.
    pub fn load(explicit: Option<&Path>, cwd: &Path, seed: Option<u64>) -> Result<Self> {
        let (mut config, config_path) = match explicit {
            Some(path) => (DiceboxConfig::load(path)?, Some(path.to_path_buf())),
            None => DiceboxConfig::discover(cwd)?,
        };
        if seed.is_some() {
            config.random.seed = seed;
        }
        Ok(Self {
            config,
            config_path,
        })
    }
}
