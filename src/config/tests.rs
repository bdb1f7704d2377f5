use super::*;
use serial_test::serial;
use std::env;

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

fn clear_duelboard_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("DUELBOARD_EXPLORATION_PROBABILITY");
        env::remove_var("DUELBOARD_K_FACTOR");
        env::remove_var("DUELBOARD_INITIAL_RATING");
        env::remove_var("DUELBOARD_ENTRIES_COLLECTION");
        env::remove_var("DUELBOARD_BLOB_PREFIX");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.exploration_probability, 0.5);
    assert_eq!(config.k_factor, 32.0);
    assert_eq!(config.initial_rating, 1500);
    assert_eq!(config.entries_collection, "entries");
    assert_eq!(config.blob_prefix, "images");
}

#[test]
fn test_default_config_validates() {
    Config::default().validate().expect("defaults are valid");
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_duelboard_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.exploration_probability, 0.5);
    assert_eq!(config.k_factor, 32.0);
}

#[test]
#[serial]
fn test_from_env_custom_exploration_probability() {
    clear_duelboard_env();

    with_env_vars(&[("DUELBOARD_EXPLORATION_PROBABILITY", "0.25")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.exploration_probability, 0.25);
    });
}

#[test]
#[serial]
fn test_from_env_custom_k_factor_and_rating() {
    clear_duelboard_env();

    with_env_vars(
        &[
            ("DUELBOARD_K_FACTOR", "16"),
            ("DUELBOARD_INITIAL_RATING", "1200"),
        ],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(config.k_factor, 16.0);
            assert_eq!(config.initial_rating, 1200);
        },
    );
}

#[test]
#[serial]
fn test_from_env_custom_paths() {
    clear_duelboard_env();

    with_env_vars(
        &[
            ("DUELBOARD_ENTRIES_COLLECTION", "contest-entries"),
            ("DUELBOARD_BLOB_PREFIX", "uploads"),
        ],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(config.entries_collection, "contest-entries");
            assert_eq!(config.blob_prefix, "uploads");
        },
    );
}

#[test]
#[serial]
fn test_from_env_blank_string_falls_back() {
    clear_duelboard_env();

    with_env_vars(&[("DUELBOARD_ENTRIES_COLLECTION", "  ")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.entries_collection, "entries");
    });
}

#[test]
#[serial]
fn test_from_env_malformed_probability_errors() {
    clear_duelboard_env();

    with_env_vars(&[("DUELBOARD_EXPLORATION_PROBABILITY", "often")], || {
        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::FloatParseError { name, .. })
                if name == "DUELBOARD_EXPLORATION_PROBABILITY"
        ));
    });
}

#[test]
#[serial]
fn test_from_env_out_of_range_probability_errors() {
    clear_duelboard_env();

    with_env_vars(&[("DUELBOARD_EXPLORATION_PROBABILITY", "1.5")], || {
        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidExplorationProbability { value }) if value == 1.5
        ));
    });
}

#[test]
fn test_validate_rejects_bad_k_factor() {
    for k_factor in [0.0, -32.0, f64::NAN, f64::INFINITY] {
        let config = Config {
            k_factor,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidKFactor { .. })
        ));
    }
}

#[test]
fn test_validate_accepts_probability_bounds() {
    for p in [0.0, 1.0] {
        let config = Config {
            exploration_probability: p,
            ..Default::default()
        };
        config.validate().expect("bounds are inclusive");
    }
}
