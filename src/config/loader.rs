//! Reading and writing the TOML configuration document.

use super::error::{ConfigError, ConfigResult};
use super::schema::Configuration;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

impl Configuration {
    /// Load the file source from `path`.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Err(err) => return Err(err.into()),
        };

        let config = Self::from_toml(&content)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Like [`Configuration::load`], but a missing file yields an empty source.
    pub fn load_optional(path: impl AsRef<Path>) -> ConfigResult<Self> {
        match Self::load(path.as_ref()) {
            Err(ConfigError::NotFound(path)) => {
                tracing::debug!("No configuration file at {}, continuing without", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Parse a configuration document.
    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    /// Render the configuration document. Unset optional fields are omitted.
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Write the configuration document to `writer`.
    pub fn write<W: Write>(&self, writer: &mut W) -> ConfigResult<()> {
        let content = self.to_toml()?;
        writer.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Create or overwrite the file at `path` with the configuration document.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let mut file = File::create(path)?;
        self.write(&mut file)?;
        file.flush()?;
        tracing::info!("Saved configuration to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::TempDir;

    fn sample() -> Configuration {
        Configuration {
            password: "secret".to_string(),
            theme_id: "1234".to_string(),
            domain: "shop.myshopify.com".to_string(),
            directory: PathBuf::from("/work"),
            ignored_files: vec!["config/settings_data.json".to_string()],
            bucket_size: 40,
            refill_rate: 2,
            concurrency: 4,
            proxy: "http://proxy.local:8080".to_string(),
            ignores: vec!["*.map".to_string(), "tmp/*".to_string()],
            timeout: Duration::from_secs(90),
        }
    }

    #[test]
    fn test_save_then_load() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join(CONFIG_FILE_NAME);

        sample().save(&path).expect("save");
        let loaded = Configuration::load(&path).expect("load");

        let expected = Configuration {
            directory: PathBuf::new(),
            ..sample()
        };
        assert_eq!(loaded, expected);
    }

    #[test]
    fn test_save_overwrites_longer_file() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "# ".repeat(4096)).expect("write");

        let small = Configuration {
            domain: "a.myshopify.com".to_string(),
            ..Configuration::default()
        };
        small.save(&path).expect("save");
        assert_eq!(Configuration::load(&path).expect("load"), small);
    }

    #[test]
    fn test_write_to_stream() {
        let mut out = Vec::new();
        sample().write(&mut out).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("timeout = \"1m 30s\""));
        assert!(text.contains("store = \"shop.myshopify.com\""));
        assert!(!text.contains("/work"));
    }

    #[test]
    fn test_very_long_timeout_reads_back() {
        let config = Configuration {
            timeout: Duration::from_secs(20_000_000_000),
            ..sample()
        };
        let reloaded = Configuration::from_toml(&config.to_toml().expect("toml")).expect("parse");
        assert_eq!(reloaded.timeout, config.timeout);
    }

    #[test]
    fn test_sub_second_timeout_reads_back() {
        let config = Configuration {
            timeout: Duration::from_millis(1_250),
            ..sample()
        };
        let reloaded = Configuration::from_toml(&config.to_toml().expect("toml")).expect("parse");
        assert_eq!(reloaded.timeout, Duration::from_millis(1_250));
    }

    #[test]
    fn test_missing_file() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("absent.toml");
        let err = Configuration::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(ref p) if *p == path));

        let config = Configuration::load_optional(&path).expect("optional");
        assert!(config.is_empty());
    }

    #[test]
    fn test_parse_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "bucket_size = \"lots\"\n").expect("write");
        assert!(matches!(
            Configuration::load(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_save_into_missing_directory_is_io_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("no/such/dir/config.toml");
        let err = sample().save(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io(ref e) if e.kind() == io::ErrorKind::NotFound));
    }
}
