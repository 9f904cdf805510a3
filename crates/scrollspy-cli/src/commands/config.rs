use anyhow::{anyhow, Result};

use scrollspy_core::AppConfig;

/// Print the resolved configuration and where it is (or would be) loaded from.
pub fn run(config: &AppConfig) -> Result<()> {
    let path = AppConfig::config_path();
    let exists = if path.exists() { "" } else { " (not present, using defaults)" };
    println!("# {}{}", path.display(), exists);
    println!();

    let rendered = toml::to_string_pretty(config).map_err(|e| anyhow!(e))?;
    print!("{rendered}");
    Ok(())
}
