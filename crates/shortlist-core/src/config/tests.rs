use super::*;
use serial_test::serial;
use std::env;
use std::net::IpAddr;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_shortlist_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("SHORTLIST_PORT");
        env::remove_var("SHORTLIST_BIND_ADDR");
        env::remove_var("SHORTLIST_MODEL_PATH");
        env::remove_var("SHORTLIST_CONTENT_PATH");
        env::remove_var("SHORTLIST_SEGMENT_MODEL_PATH");
        env::remove_var("SHORTLIST_EMBEDDING_DIM");
        env::remove_var("SHORTLIST_TOP_K");
        env::remove_var("SHORTLIST_SIMILARITY_THRESHOLD");
        env::remove_var("SHORTLIST_SAFETY_ENDPOINT");
        env::remove_var("SHORTLIST_SAFETY_KEY");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.port, 8080);
    assert_eq!(
        config.bind_addr,
        IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))
    );
    assert!(config.model_path.is_none());
    assert!(config.content_path.is_none());
    assert!(config.segment_model_path.is_none());
    assert_eq!(config.embedding_dim, 384);
    assert_eq!(config.top_k, 3);
    assert_eq!(config.similarity_threshold, 0.5);
    assert!(config.safety_endpoint.is_none());
    assert!(config.safety_key.is_none());
}

#[test]
fn test_socket_addr() {
    let config = Config::default();
    assert_eq!(config.socket_addr(), "127.0.0.1:8080");

    let config = Config {
        port: 3000,
        bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0)),
        ..Default::default()
    };
    assert_eq!(config.socket_addr(), "0.0.0.0:3000");
}

#[test]
fn test_default_config_validates() {
    assert!(Config::default().validate().is_ok());
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_shortlist_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.port, 8080);
    assert_eq!(config.top_k, 3);
    assert_eq!(config.similarity_threshold, 0.5);
}

#[test]
#[serial]
fn test_from_env_custom_port() {
    clear_shortlist_env();

    with_env_vars(&[("SHORTLIST_PORT", "3000")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.port, 3000);
    });
}

#[test]
#[serial]
fn test_from_env_invalid_port() {
    clear_shortlist_env();

    with_env_vars(&[("SHORTLIST_PORT", "not-a-port")], || {
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::PortParseError { .. })
        ));
    });

    with_env_vars(&[("SHORTLIST_PORT", "0")], || {
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidPort { .. })
        ));
    });
}

#[test]
#[serial]
fn test_from_env_custom_bind_addr() {
    clear_shortlist_env();

    with_env_vars(&[("SHORTLIST_BIND_ADDR", "0.0.0.0")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(
            config.bind_addr,
            IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0))
        );
    });
}

#[test]
#[serial]
fn test_from_env_ranking_overrides() {
    clear_shortlist_env();

    with_env_vars(
        &[
            ("SHORTLIST_EMBEDDING_DIM", "768"),
            ("SHORTLIST_TOP_K", "5"),
            ("SHORTLIST_SIMILARITY_THRESHOLD", "0.35"),
        ],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(config.embedding_dim, 768);
            assert_eq!(config.top_k, 5);
            assert_eq!(config.similarity_threshold, 0.35);
        },
    );
}

#[test]
#[serial]
fn test_from_env_rejects_zero_top_k() {
    clear_shortlist_env();

    with_env_vars(&[("SHORTLIST_TOP_K", "0")], || {
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidTopK { .. })
        ));
    });
}

#[test]
#[serial]
fn test_from_env_rejects_out_of_range_threshold() {
    clear_shortlist_env();

    with_env_vars(&[("SHORTLIST_SIMILARITY_THRESHOLD", "1.5")], || {
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidThreshold { .. })
        ));
    });
}

#[test]
#[serial]
fn test_from_env_blank_optional_values_ignored() {
    clear_shortlist_env();

    with_env_vars(
        &[
            ("SHORTLIST_MODEL_PATH", "  "),
            ("SHORTLIST_SAFETY_ENDPOINT", ""),
        ],
        || {
            let config = Config::from_env().expect("should parse");
            assert!(config.model_path.is_none());
            assert!(config.safety_endpoint.is_none());
        },
    );
}

#[test]
fn test_validate_missing_content_path() {
    let config = Config {
        content_path: Some(std::path::PathBuf::from("/nonexistent/catalog.json")),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::PathNotFound { .. })
    ));
}

#[test]
fn test_validate_content_path_must_be_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config {
        content_path: Some(dir.path().to_path_buf()),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotAFile { .. })
    ));
}

#[test]
fn test_validate_model_path_must_be_dir() {
    let file = tempfile::NamedTempFile::new().expect("tempfile");
    let config = Config {
        model_path: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotADirectory { .. })
    ));
}
