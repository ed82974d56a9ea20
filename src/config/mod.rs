pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_socket_addr, Validate,
};
use std::net::SocketAddr;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const MAX_PAGE_SIZE: usize = 100;

/// Effective runtime settings: defaults, then the TOML file, then CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_address: String,
    pub page_size: usize,
    pub seed_sample_data: bool,
    pub log_format: LogFormat,
    pub log_level: String,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            seed_sample_data: false,
            log_format: LogFormat::Compact,
            log_level: "info".to_string(),
            verbose: false,
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            bind_address: config
                .server
                .bind_address
                .clone()
                .unwrap_or(defaults.bind_address),
            page_size: config.owners.page_size.unwrap_or(defaults.page_size),
            seed_sample_data: config
                .data
                .seed_sample_data
                .unwrap_or(defaults.seed_sample_data),
            log_format: config.logging.format.unwrap_or(defaults.log_format),
            log_level: config.logging.level.clone().unwrap_or(defaults.log_level),
            verbose: false,
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        validate_socket_addr("server.bind_address", &self.bind_address)
    }

    /// Default `EnvFilter` directive for this crate and the request trace layer.
    pub fn log_directive(&self) -> String {
        if self.verbose {
            "petclinic=debug,tower_http=debug,info".to_string()
        } else {
            format!("petclinic={},tower_http={}", self.log_level, self.log_level)
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        self.socket_addr()?;
        validate_range("owners.page_size", self.page_size, 1, MAX_PAGE_SIZE)?;
        validate_non_empty_string("logging.level", &self.log_level)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "petclinic")]
#[command(about = "Veterinary clinic owner, pet and visit management service")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<std::path::PathBuf>,

    #[arg(long, help = "Socket address to listen on")]
    pub bind: Option<String>,

    #[arg(long, help = "Owners per page in search results")]
    pub page_size: Option<usize>,

    #[arg(long, help = "Load the sample owners, pets and visits at startup")]
    pub seed: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_toml(&TomlConfig::from_file(path)?),
            None => Settings::default(),
        };

        if let Some(bind) = &self.bind {
            settings.bind_address = bind.clone();
        }
        if let Some(page_size) = self.page_size {
            settings.page_size = page_size;
        }
        if self.seed {
            settings.seed_sample_data = true;
        }
        if self.json_logs {
            settings.log_format = LogFormat::Json;
        }
        settings.verbose = self.verbose;

        Ok(settings)
    }
}
