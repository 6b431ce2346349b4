//! Authentication for the Anthropic API

use promo_core::{PromoError, Result};
use std::env;

/// Environment variable consulted when the configuration names none
pub const DEFAULT_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Read the API key from the given environment variable
pub fn get_api_key(env_var: &str) -> Result<String> {
    match env::var(env_var) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(PromoError::Auth(format!(
            "No API key found. Set {}=sk-ant-... to enable generation.",
            env_var
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent concurrent env var modifications
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env_var<F, R>(key: &str, value: Option<&str>, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = ENV_LOCK.lock().unwrap();
        let original = env::var(key).ok();

        match value {
            Some(v) => env::set_var(key, v),
            None => env::remove_var(key),
        }

        let result = f();

        match original {
            Some(v) => env::set_var(key, v),
            None => env::remove_var(key),
        }

        result
    }

    #[test]
    fn test_key_present() {
        with_env_var("PROMO_TEST_KEY", Some("sk-test"), || {
            let key = get_api_key("PROMO_TEST_KEY").unwrap();
            assert_eq!(key, "sk-test");
        });
    }

    #[test]
    fn test_key_missing() {
        with_env_var("PROMO_TEST_KEY", None, || {
            let result = get_api_key("PROMO_TEST_KEY");
            assert!(matches!(result, Err(PromoError::Auth(_))));
        });
    }

    #[test]
    fn test_blank_key_rejected() {
        with_env_var("PROMO_TEST_KEY", Some("   "), || {
            assert!(get_api_key("PROMO_TEST_KEY").is_err());
        });
    }
}
