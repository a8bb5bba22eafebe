//! Unit tests for the config module
//!
//! Tests cover:
//! - Config defaults
//! - Loading from a TOML file on disk
//! - Validation failures

use std::io::Write;

use utilkit::config::{Config, LogBackend};
use utilkit::errors::{get_exit_code, EXIT_CONFIG_ERROR};
use utilkit::logging::LogLevel;
use utilkit::text_box::BoxStyle;

mod load_tests {
    use super::*;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[logging]
level = "warn"
backend = "none"

[text_box]
style = "ascii"
padding = 0

[queue]
default_capacity = 4
"#
        )
        .unwrap();

        let config = Config::load(Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert_eq!(config.logging.backend, LogBackend::None);
        assert_eq!(config.text_box.style, BoxStyle::Ascii);
        assert_eq!(config.text_box.padding, 0);
        assert_eq!(config.queue.default_capacity, 4);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[queue]\ndefault_capacity = 0").unwrap();
        let err = Config::load(Some(file.path().to_str().unwrap())).unwrap_err();
        assert!(err.to_string().contains("default_capacity"));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "this is = = not toml").unwrap();
        let err = Config::load(Some(file.path().to_str().unwrap())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_load_failures_map_to_config_exit_code() {
        let missing = Config::load(Some("/no/such/dir/utilkit.toml")).unwrap_err();
        let err = anyhow::Error::from(missing);
        assert_eq!(get_exit_code(&err), EXIT_CONFIG_ERROR);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging\nlevel = ").unwrap();
        let malformed = Config::load(Some(file.path().to_str().unwrap())).unwrap_err();
        let err = anyhow::Error::from(malformed);
        assert_eq!(get_exit_code(&err), EXIT_CONFIG_ERROR);
    }

    #[test]
    fn test_unknown_backend_rejected() {
        assert!(Config::from_toml("[logging]\nbackend = \"syslog\"").is_err());
    }
}

mod default_tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_toml_contains_sections() {
        let text = toml::to_string(&Config::default()).unwrap();
        assert!(text.contains("[logging]"));
        assert!(text.contains("[text_box]"));
        assert!(text.contains("[queue]"));
    }
}
