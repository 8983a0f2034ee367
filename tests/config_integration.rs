use adeola_portfolio::config::AppConfig;
use adeola_portfolio::content::PageVariant;
use adeola_portfolio::error::SiteError;
use serial_test::serial;
use std::env;
use std::fs;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("PORTFOLIO_SERVER__PORT");
        env::remove_var("PORTFOLIO_SITE__VARIANT");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args(["portfolio"]).expect("Failed to load config");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.static_dir, "static");
    assert_eq!(config.site.variant, PageVariant::Vivid);
    assert_eq!(config.bind_addr(), "127.0.0.1:3000");
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("PORTFOLIO_SERVER__PORT", "9090");
        env::set_var("PORTFOLIO_SITE__VARIANT", "classic");
    }

    let config = AppConfig::load_from_args(["portfolio"]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.site.variant, PageVariant::Classic);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("PORTFOLIO_SERVER__PORT", "9090");
        env::set_var("PORTFOLIO_SITE__VARIANT", "classic");
    }

    let config = AppConfig::load_from_args([
        "portfolio",
        "--port",
        "8181",
        "--variant",
        "vivid",
        "--host",
        "0.0.0.0",
    ])
    .expect("Failed to load config");
    assert_eq!(config.server.port, 8181);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.site.variant, PageVariant::Vivid);

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = dir.path().join("site.yaml");
    fs::write(
        &file_path,
        r#"
server:
  port: 7070
site:
  variant: classic
    "#,
    )
    .expect("Failed to write temp config");

    // Point AppConfig at the file through the CLI env fallback
    unsafe {
        env::set_var("CONFIG_FILE", &file_path);
    }

    let config = AppConfig::load_from_args(["portfolio"]).expect("Failed to load config from file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.site.variant, PageVariant::Classic);
    // Untouched keys keep their defaults
    assert_eq!(config.server.host, "127.0.0.1");

    clear_env_vars();
}

#[test]
#[serial]
fn test_env_beats_file() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = dir.path().join("site.yaml");
    fs::write(
        &file_path,
        r#"
server:
  host: 0.0.0.0
  port: 7070
site:
  variant: vivid
    "#,
    )
    .expect("Failed to write temp config");

    unsafe {
        env::set_var("CONFIG_FILE", &file_path);
        env::set_var("PORTFOLIO_SERVER__PORT", "9191");
        env::set_var("PORTFOLIO_SITE__VARIANT", "classic");
    }

    let config = AppConfig::load_from_args(["portfolio"]).expect("Failed to load config");
    assert_eq!(config.server.port, 9191);
    assert_eq!(config.site.variant, PageVariant::Classic);
    // File still beats defaults where the environment is silent
    assert_eq!(config.server.host, "0.0.0.0");

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args(["portfolio", "--config", "does/not/exist.yaml"]);
    assert!(matches!(result, Err(SiteError::Config(_))));
}

#[test]
#[serial]
fn test_unknown_variant_is_rejected() {
    clear_env_vars();

    let result = AppConfig::load_from_args(["portfolio", "--variant", "neon"]);
    assert!(matches!(result, Err(SiteError::Config(_))));
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    // Create ./portfolio.yaml
    let config_content = r#"
server:
  port: 6060
    "#;
    let cwd_path = "portfolio.yaml";
    fs::write(cwd_path, config_content).expect("Failed to write ./portfolio.yaml");

    // No env var, no CLI flag: should pick up ./portfolio.yaml
    let config = AppConfig::load_from_args(["portfolio"]);

    fs::remove_file(cwd_path).unwrap();

    assert_eq!(config.expect("Failed to load config").server.port, 6060);
}
