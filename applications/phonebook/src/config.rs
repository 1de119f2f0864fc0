/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_frontend")]
    pub frontend: FrontendSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FrontendSettings {
    /// Directory holding the built frontend
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file and environment
    ///
    /// Environment variables use the `PHONEBOOK_` prefix and `__` between
    /// sections, e.g. `PHONEBOOK_SERVER__PORT`.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        let config_path = path.map_or_else(|| PathBuf::from("config.toml"), Path::to_path_buf);
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        } else if path.is_some() {
            return Err(ServerError::Config(format!(
                "Config file not found at {:?}",
                config_path
            )));
        }

        settings = settings.add_source(
            config::Environment::with_prefix("PHONEBOOK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config("server port must not be 0".to_string()));
        }

        let dir = &self.frontend.static_dir;
        if dir.exists() && !dir.is_dir() {
            return Err(ServerError::Config(format!(
                "static_dir {:?} is not a directory",
                dir
            )));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_frontend() -> FrontendSettings {
    FrontendSettings {
        static_dir: default_static_dir(),
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            frontend: default_frontend(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.frontend.static_dir, PathBuf::from("dist"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn loads_values_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 8080\n\n[frontend]\nstatic_dir = \"/srv/phonebook\""
        )
        .unwrap();

        let config = ServerConfig::load_from(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.frontend.static_dir, PathBuf::from("/srv/phonebook"));
    }

    #[test]
    fn static_dir_must_be_a_directory() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut config = ServerConfig::default();
        config.frontend.static_dir = file.path().to_path_buf();

        assert!(matches!(config.validate(), Err(ServerError::Config(_))));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = ServerConfig::load_from(Some(Path::new("/nonexistent/phonebook.toml")));
        assert!(matches!(result, Err(ServerError::Config(_))));
    }
}
