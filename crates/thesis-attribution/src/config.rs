//! Configuration for thesis-attribution
//!
//! Loaded from TOML. Every section is optional and falls back to defaults:
//!
//! ```toml
//! [repository]
//! base_url = "https://dspace.ut.ee"
//! timeout_secs = 30
//!
//! [fields]
//! author = "dc.contributor.author"
//! advisor = "dc.contributor.advisor"
//! type_key = "dc.type"
//! thesis_type = "Thesis"
//!
//! [wiki]
//! api_url = "https://wiki.example.org/api.php"
//! page = "Team"
//! subject_sections = ["BS, MS Students", "Alumni"]
//! advisor_sections = ["Staff"]
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use dspace_client::keys;
use serde::{Deserialize, Serialize};

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {message}")]
    Io { path: String, message: String },

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributionConfig {
    pub repository: RepositoryConfig,
    pub fields: FieldConfig,
    pub wiki: WikiConfig,
}

/// Where the repository lives and how long to wait for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://dspace.ut.ee".to_string(),
            timeout_secs: 30,
            user_agent: dspace_client::http::DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl RepositoryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Metadata keys and values the resolver matches on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub author: String,
    pub advisor: String,
    pub type_key: String,
    pub thesis_type: String,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            author: keys::AUTHOR.to_string(),
            advisor: keys::ADVISOR.to_string(),
            type_key: keys::TYPE.to_string(),
            thesis_type: keys::THESIS_TYPE.to_string(),
        }
    }
}

/// The wiki page holding the team roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WikiConfig {
    /// MediaWiki `api.php` endpoint
    pub api_url: String,
    pub page: String,
    /// Sections whose members are looked up as thesis authors
    pub subject_sections: Vec<String>,
    /// Sections whose members form the advisor roster, in probe order
    pub advisor_sections: Vec<String>,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            page: String::new(),
            subject_sections: vec!["BS, MS Students".to_string()],
            advisor_sections: vec!["Staff".to_string()],
        }
    }
}

impl WikiConfig {
    /// Check that the wiki can actually be queried
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::Invalid("wiki.api_url is not set".to_string()));
        }
        if self.page.trim().is_empty() {
            return Err(ConfigError::Invalid("wiki.page is not set".to_string()));
        }
        if self.advisor_sections.is_empty() {
            return Err(ConfigError::Invalid(
                "wiki.advisor_sections is empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl AttributionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from `path` if given, else from the default location if it
    /// exists, else fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(default) if default.exists() => Self::load(&default),
            _ => Ok(Self::default()),
        }
    }

    /// `<config dir>/thesis-attribution/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("thesis-attribution").join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repository.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "repository.base_url is empty".to_string(),
            ));
        }
        if self.repository.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "repository.timeout_secs must be positive".to_string(),
            ));
        }
        let fields = [
            ("fields.author", &self.fields.author),
            ("fields.advisor", &self.fields.advisor),
            ("fields.type_key", &self.fields.type_key),
            ("fields.thesis_type", &self.fields.thesis_type),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{} is empty", name)));
            }
        }
        Ok(())
    }
}
