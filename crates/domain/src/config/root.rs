use serde::{Deserialize, Serialize};

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::forwarders::DNS_PUBLIC_ENV;
use super::logging::LoggingConfig;

const LOCAL_CONFIG_PATH: &str = "aliasdns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/aliasdns/config.toml";

/// Main configuration structure for aliasdns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Resolver and quorum configuration
    #[serde(default)]
    pub dns: DnsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. aliasdns.toml in current directory
    /// 3. /etc/aliasdns/config.toml
    /// 4. Default configuration
    ///
    /// `DNS_PUBLIC` from the environment is applied on top, then command-line
    /// overrides, so an explicit flag always wins.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::get_config_path() {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        config.apply_overrides(cli_overrides, std::env::var(DNS_PUBLIC_ENV).ok());
        Ok(config)
    }

    /// Layer the environment value and then the command-line overrides.
    pub fn apply_overrides(
        &mut self,
        cli_overrides: CliOverrides,
        env_dns_public: Option<String>,
    ) {
        self.apply_env_overrides(env_dns_public);
        self.apply_cli_overrides(cli_overrides);
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(dns_public) = overrides.dns_public {
            self.dns.dns_public = Some(dns_public);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if !overrides.update_hostnames.is_empty() {
            self.dns.update_hostnames = overrides.update_hostnames;
        }
    }

    /// The `DNS_PUBLIC` environment variable wins over the file value.
    pub fn apply_env_overrides(&mut self, dns_public: Option<String>) {
        if let Some(dns_public) = dns_public {
            self.dns.dns_public = Some(dns_public);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dns.quorum_workers == 0 {
            return Err(ConfigError::Validation(
                "quorum_workers must be greater than 0".to_string(),
            ));
        }

        if self.dns.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "query_timeout must be greater than 0".to_string(),
            ));
        }

        if self.dns.attempts == 0 {
            return Err(ConfigError::Validation(
                "attempts must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| std::path::Path::new(path).exists())
            .map(str::to_string)
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_public: Option<String>,
    pub log_level: Option<String>,
    pub update_hostnames: Vec<String>,
}
