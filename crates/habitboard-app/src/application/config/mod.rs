//! Runtime configuration resolved from environment variables.

use std::path::PathBuf;

use habitboard_domain::DomainError;

/// Port the HTTP server binds to, unless overridden.
pub const DEFAULT_PORT: u16 = 3001;

/// Environment variable overriding the listen port.
pub const PORT_ENV: &str = "HABITBOARD_PORT";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "HABITBOARD_DATA_DIR";

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    port: u16,
    data_dir: PathBuf,
}

impl AppConfig {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self, DomainError> {
        let port = match std::env::var(PORT_ENV) {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                DomainError::InvalidInput(format!("{} must be a valid port number: {}", PORT_ENV, raw))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let data_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(raw) if !raw.trim().is_empty() => PathBuf::from(raw),
            _ => default_data_dir()?,
        };

        Ok(Self { port, data_dir })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    /// Path of the SQLite database file inside the data directory.
    pub fn db_path(&self) -> PathBuf {
        let file_name = if cfg!(debug_assertions) {
            "habitboard-dev.db"
        } else {
            "habitboard.db"
        };
        self.data_dir.join(file_name)
    }

    /// Directory the rolling log files are written to.
    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }

    #[cfg(test)]
    pub fn for_tests(data_dir: PathBuf) -> Self {
        Self {
            port: 0,
            data_dir,
        }
    }
}

fn default_data_dir() -> Result<PathBuf, DomainError> {
    dirs::data_dir()
        .map(|dir| dir.join("habitboard"))
        .ok_or_else(|| {
            DomainError::Infrastructure("Could not determine platform data directory".to_string())
        })
}
