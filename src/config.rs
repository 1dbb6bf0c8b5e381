use std::path::PathBuf;

use anyhow::Context;

use crate::keys::KeyStore;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// TOML file holding the `[api_keys]` section.
    pub api_keys_file: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            api_keys_file: std::env::var("API_KEYS_FILE")
                .unwrap_or_else(|_| "secrets.toml".to_string())
                .into(),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Load the key file. Called before the listener binds; an error here
    /// aborts startup.
    pub fn load_keys(&self) -> anyhow::Result<KeyStore> {
        KeyStore::load(&self.api_keys_file).with_context(|| {
            format!(
                "cannot start without API keys from {}",
                self.api_keys_file.display()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    fn config_with(dir: &tempfile::TempDir, contents: Option<&str>) -> Config {
        let path = dir.path().join("secrets.toml");
        if let Some(contents) = contents {
            std::fs::write(&path, contents).unwrap();
        }
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            api_keys_file: path,
        }
    }

    #[test]
    fn load_keys_returns_configured_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with(&dir, Some("[api_keys]\ndemo_key = \"12345\"\n"));

        let keys = config.load_keys().unwrap();
        assert!(keys.contains("12345"));
    }

    #[test]
    fn load_keys_fails_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = config_with(&dir, None).load_keys().unwrap_err();

        assert!(err.to_string().starts_with("cannot start without API keys"));
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn load_keys_fails_with_empty_section() {
        let dir = tempfile::tempdir().unwrap();
        let err = config_with(&dir, Some("[api_keys]\n")).load_keys().unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::NoKeys(_))
        ));
    }

    #[test]
    fn load_keys_fails_without_section() {
        let dir = tempfile::tempdir().unwrap();
        let err = config_with(&dir, Some("[other]\nkey = \"x\"\n"))
            .load_keys()
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::MissingSection(_))
        ));
    }
}
