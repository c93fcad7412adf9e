use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub mail: MailConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Delivery settings for the contact pipeline. Transactional providers
/// expose SMTP ingestion, so the account API key rides as the SMTP
/// password. Nothing outside this struct reads the process environment.
#[derive(Debug, Deserialize, Clone)]
pub struct MailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default = "default_from_email")]
    pub from_email: String,
    #[serde(default = "default_from_name")]
    pub from_name: String,
    #[serde(default = "default_to_email")]
    pub to_email: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_email: default_from_email(),
            from_name: default_from_name(),
            to_email: default_to_email(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_email() -> String {
    "noreply@folio.studio".to_string()
}

fn default_from_name() -> String {
    "folio".to_string()
}

fn default_to_email() -> String {
    "hello@folio.studio".to_string()
}

/// Identity shown on the page and addressed in the inquiry email.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_owner_name")]
    pub owner_name: String,
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: default_owner_name(),
            contact_email: default_contact_email(),
        }
    }
}

fn default_owner_name() -> String {
    "Folio Studio".to_string()
}

fn default_contact_email() -> String {
    "hello@folio.studio".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FOLIO__MAIL__TO_EMAIL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional - ignore if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true),
        );

        // Also support legacy environment variables without prefix
        if let Ok(api_key) = env::var("MAIL_API_KEY") {
            builder = builder.set_override("mail.smtp_password", api_key)?;
        }
        if let Ok(from_email) = env::var("MAIL_FROM_EMAIL") {
            builder = builder.set_override("mail.from_email", from_email)?;
        }
        if let Ok(to_email) = env::var("MAIL_TO_EMAIL") {
            builder = builder.set_override("mail.to_email", to_email)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if !self.mail.from_email.contains('@') {
            return Err("mail.from_email must be an email address".to_string());
        }
        if !self.mail.to_email.contains('@') {
            return Err("mail.to_email must be an email address".to_string());
        }
        Ok(())
    }
}
