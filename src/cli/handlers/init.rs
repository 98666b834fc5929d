use crate::config::{CONFIG_FILE_NAME, DiceboxConfig};
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(force: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    DiceboxConfig::default().save(&config_path)?;

    println!("{} {}", "Initialized".green(), config_path.display());
    Ok(())
}
