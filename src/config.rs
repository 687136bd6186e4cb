//! Configuration for the opportunity board
//!
//! The remote projects endpoint defaults to a literal constant and can
//! be overridden through the `BOARD_`-prefixed environment
//! (`BOARD_PROJECTS_URL`).

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Default base URL of the research-projects endpoint
pub const DEFAULT_PROJECTS_URL: &str = "https://api.ecell.example.edu/projects";

/// Runtime settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Base URL the projects store loads from
    pub projects_url: String,
}

impl Settings {
    /// Build settings from defaults and the environment
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("projects_url", DEFAULT_PROJECTS_URL)?
            .add_source(Environment::with_prefix("board"))
            .build()?;
        conf.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default_url() {
        let settings = Settings::new().unwrap();
        assert_eq!(settings.projects_url, DEFAULT_PROJECTS_URL);
    }
}
