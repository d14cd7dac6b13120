use std::{io::Write, path::Path};

use crate::Config;

/// Load the configuration file if present. A file that exists but cannot be
/// parsed or validated is an error.
pub fn load_if_exist(config_path: &str) -> eyre::Result<Option<Config>> {
    let Some(content) = read_file_content_if_exist(config_path)? else {
        return Ok(None);
    };

    let config: Config = toml::from_str(&content)
        .map_err(|e| eyre::eyre!("Failed to parse config file '{config_path}': {e}"))?;
    config.validate()?;

    Ok(Some(config))
}

fn read_file_content_if_exist(file_path: &str) -> eyre::Result<Option<String>> {
    let path = Path::new(file_path);

    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    Ok(Some(content))
}

pub fn save(config_path: &str, config: &Config) -> eyre::Result<()> {
    let toml_string =
        toml::to_string(config).map_err(|e| eyre::eyre!("Failed to serialize config: {e}"))?;

    let path = Path::new(config_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| eyre::eyre!("Failed to create directory {parent:?}: {e}"))?;
    }

    let mut file = std::fs::File::create(path)
        .map_err(|e| eyre::eyre!("Failed to create or truncate file '{config_path}': {e}"))?;

    file.write_all(toml_string.as_bytes())
        .map_err(|e| eyre::eyre!("Failed to write to file '{config_path}': {e}"))?;

    Ok(())
}
