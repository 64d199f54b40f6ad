//! Config command implementation.
//!
//! Prints the effective configuration as TOML, or writes it to a file as a
//! starting point for a `calxt.toml`.

use std::path::PathBuf;

use tracing::info;

use crate::config::Config;
use crate::error::Result;

/// Arguments for the config command.
#[derive(Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Write the configuration here instead of printing it.
    pub save: Option<PathBuf>,
}

/// Run the config command.
pub fn run_config(args: ConfigArgs, config: &Config) -> Result<()> {
    match args.save {
        Some(path) => {
            config.save_to_path(&path)?;
            info!(path = %path.display(), "configuration written");
        }
        None => print!("{}", config.to_toml()?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_writes_loadable_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("calxt.toml");
        let config = Config {
            max_tokens: 7,
            ..Config::default()
        };

        run_config(ConfigArgs { save: Some(path.clone()) }, &config).unwrap();
        assert_eq!(Config::load_from_path(&path).unwrap(), config);
    }

    #[test]
    fn test_toml_lists_every_key() {
        let text = Config::default().to_toml().unwrap();
        assert!(text.contains("format = \"plain\""));
        assert!(text.contains("positions = false"));
        assert!(text.contains("max_tokens = 10000"));
    }
}
