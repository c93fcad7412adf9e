//! Tests for the configuration system

use folio::Config;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.mail.smtp_host, "localhost");
    assert_eq!(config.site.owner_name, "Folio Studio");
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn test_loaded_config_passes_validation() {
    let config = Config::load(None).expect("Failed to load config");

    assert!(config.validate().is_ok());
}

#[test]
fn test_explicit_config_path_is_honored() {
    let config =
        Config::load(Some("config/default.toml".to_string())).expect("Failed to load config");

    assert_eq!(config.mail.to_email, "hello@folio.studio");
    assert_eq!(config.mail.from_email, "noreply@folio.studio");
}
