//! Path management for carteira-cli
//!
//! Provides XDG-compliant path resolution for the data directory.
//!
//! ## Path Resolution Order
//!
//! 1. `CARTEIRA_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/carteira-cli` or `~/.config/carteira-cli`
//! 3. Windows: `%APPDATA%\carteira-cli`

use std::path::PathBuf;

use crate::error::CarteiraError;

/// Manages all paths used by carteira-cli
#[derive(Debug, Clone)]
pub struct CarteiraPaths {
    /// Base directory for all carteira-cli data
    base_dir: PathBuf,
}

impl CarteiraPaths {
    /// Create a new CarteiraPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, CarteiraError> {
        let base_dir = if let Ok(custom) = std::env::var("CARTEIRA_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create CarteiraPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/carteira-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/carteira-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Get the default path for the exported report document
    pub fn report_file(&self) -> PathBuf {
        self.base_dir.join("transacoes.html")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), CarteiraError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CarteiraError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CarteiraError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CarteiraError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                CarteiraError::Config("Could not determine home directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("carteira-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CarteiraError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CarteiraError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("carteira-cli"))
}
