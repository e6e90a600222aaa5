// Configuration loading tests
// Author: kelexine (https://github.com/kelexine)

use gemvision::cli::Args;
use gemvision::config::AppConfig;
use std::io::Write;

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_api_key_fails_fast() {
    let file = config_file("[server]\nport = 4000\n");
    let args = Args {
        config: Some(file.path().to_path_buf()),
        ..Args::default()
    };

    let err = AppConfig::load(&args).unwrap_err();
    assert!(err.to_string().contains("GEMINI_API_KEY"));
}

#[test]
fn test_file_values_are_loaded() {
    let file = config_file(
        r#"
[server]
port = 4000

[gemini]
api_key = "file-key"
model = "gemini-2.5-pro"
timeout_seconds = 30

[logging]
format = "json"
"#,
    );
    let args = Args {
        config: Some(file.path().to_path_buf()),
        ..Args::default()
    };

    let config = AppConfig::load(&args).unwrap();
    assert_eq!(config.server.port, 4000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.gemini.api_key.expose(), "file-key");
    assert_eq!(config.gemini.model, "gemini-2.5-pro");
    assert_eq!(config.gemini.timeout_seconds, Some(30));
    assert_eq!(config.logging.format, "json");
}

#[test]
fn test_cli_overrides_file() {
    let file = config_file("[server]\nport = 4000\n\n[gemini]\napi_key = \"file-key\"\n");
    let args = Args {
        host: Some("127.0.0.1".to_string()),
        port: Some(5050),
        api_key: Some("cli-key".to_string()),
        config: Some(file.path().to_path_buf()),
    };

    let config = AppConfig::load(&args).unwrap();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 5050);
    assert_eq!(config.gemini.api_key.expose(), "cli-key");
}

#[test]
fn test_defaults_with_key_only() {
    let file = config_file("");
    let args = Args {
        api_key: Some("only-key".to_string()),
        config: Some(file.path().to_path_buf()),
        ..Args::default()
    };

    let config = AppConfig::load(&args).unwrap();
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.gemini.model, "gemini-2.5-flash");
    assert!(config.gemini.timeout_seconds.is_none());
}

#[test]
fn test_explicit_config_path_must_exist() {
    let args = Args {
        api_key: Some("key".to_string()),
        config: Some("/nonexistent/gemvision.toml".into()),
        ..Args::default()
    };

    assert!(AppConfig::load(&args).is_err());
}
