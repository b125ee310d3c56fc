use crate::config::{Config, Mode};
use crate::domain::errors::ConfigError;
use crate::domain::feasibility::NormalizationMode;
use std::env;
use std::sync::Mutex;
use std::sync::OnceLock;

// Global lock to prevent race conditions when modifying environment variables in tests
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn get_env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

fn set_var(key: &str, value: &str) {
    // SAFETY: every test touching the environment holds ENV_LOCK
    unsafe { env::set_var(key, value) }
}

fn remove_var(key: &str) {
    // SAFETY: every test touching the environment holds ENV_LOCK
    unsafe { env::remove_var(key) }
}

const KEYS: &[&str] = &[
    "MODE",
    "OPENAI_API_KEY",
    "OPENAI_MODEL",
    "NEWS_API_KEY",
    "HTTP_MAX_RETRIES",
    "IDEAFORGE_NORMALIZATION",
    "IDEAFORGE_IDEAS_PER_REQUEST",
    "IDEAFORGE_KEYWORDS_FILE",
];

fn clear_all() {
    for key in KEYS {
        remove_var(key);
    }
}

#[test]
fn test_config_defaults() {
    let _guard = get_env_lock().lock().unwrap();
    clear_all();

    let config = Config::from_env().unwrap();

    assert_eq!(config.mode, Mode::Live);
    assert_eq!(config.scoring.normalization, NormalizationMode::PerCall);
    assert_eq!(config.scoring.ideas_per_request, 5);
    assert!(config.scoring.keywords_file.is_none());
    assert!(config.providers.openai.api_key.is_none());
    assert_eq!(config.providers.http_max_retries, 3);
}

#[test]
fn test_config_overrides() {
    let _guard = get_env_lock().lock().unwrap();
    clear_all();
    set_var("MODE", "offline");
    set_var("OPENAI_API_KEY", "sk-test");
    set_var("OPENAI_MODEL", "gpt-4o-mini");
    set_var("NEWS_API_KEY", "news-test");
    set_var("HTTP_MAX_RETRIES", "1");
    set_var("IDEAFORGE_NORMALIZATION", "batched");
    set_var("IDEAFORGE_IDEAS_PER_REQUEST", "3");

    let config = Config::from_env().unwrap();

    assert_eq!(config.mode, Mode::Offline);
    assert_eq!(config.providers.openai.api_key.as_deref(), Some("sk-test"));
    assert_eq!(config.providers.openai.model, "gpt-4o-mini");
    assert_eq!(config.providers.news_api.api_key.as_deref(), Some("news-test"));
    assert_eq!(config.providers.http_max_retries, 1);
    assert_eq!(config.scoring.normalization, NormalizationMode::Batched);
    assert_eq!(config.scoring.ideas_per_request, 3);

    clear_all();
}

#[test]
fn test_blank_api_key_is_treated_as_missing() {
    let _guard = get_env_lock().lock().unwrap();
    clear_all();
    set_var("OPENAI_API_KEY", "   ");

    let config = Config::from_env().unwrap();
    assert!(config.providers.openai.api_key.is_none());

    clear_all();
}

#[test]
fn test_invalid_values_are_rejected() {
    let _guard = get_env_lock().lock().unwrap();
    clear_all();

    set_var("IDEAFORGE_NORMALIZATION", "sometimes");
    assert!(Config::from_env().is_err());
    remove_var("IDEAFORGE_NORMALIZATION");

    set_var("IDEAFORGE_IDEAS_PER_REQUEST", "0");
    assert!(Config::from_env().is_err());
    set_var("IDEAFORGE_IDEAS_PER_REQUEST", "many");
    let err = Config::from_env().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidValue { key, value })
            if key == "IDEAFORGE_IDEAS_PER_REQUEST" && value == "many"
    ));

    clear_all();
}
