//! Reads the configuration the hosting page provides at runtime.
//!
//! Deployments write an `env-config.js` that assigns `window._env_`, so the
//! API location can change without rebuilding the bundle.

use js_sys::Reflect;
use wasm_bindgen::JsValue;

use herald::config::{API_BASE_URL_KEY, ClientConfig, LEGACY_API_URL_KEY};
use herald::log;

const ENV_GLOBAL: &str = "_env_";

fn read_string(target: &JsValue, key: &str) -> Option<String> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_string())
}

fn env_object() -> Option<JsValue> {
    let window = web_sys::window()?;
    Reflect::get(window.as_ref(), &JsValue::from_str(ENV_GLOBAL)).ok()
}

/// Resolves the client config from the value of `window._env_`.
///
/// Anything other than an object counts as missing, as do keys whose values
/// are not strings.
fn config_from_env(env: Option<JsValue>) -> ClientConfig {
    let Some(env) = env.filter(JsValue::is_object) else {
        log::warn!("window.{ENV_GLOBAL} is not defined, using default API location");
        return ClientConfig::from_sources(None, None);
    };

    ClientConfig::from_sources(
        read_string(&env, API_BASE_URL_KEY),
        read_string(&env, LEGACY_API_URL_KEY),
    )
}

/// Builds the client config from `window._env_`.
pub fn load() -> ClientConfig {
    let config = config_from_env(env_object());
    log::info!("Using API base URL {:?}", config.api_base_url());
    config
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use herald::config::DEFAULT_API_BASE_URL;
    use js_sys::Object;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn env_with(entries: &[(&str, JsValue)]) -> Option<JsValue> {
        let env = Object::new();
        for (key, value) in entries {
            Reflect::set(&env, &JsValue::from_str(key), value).unwrap();
        }
        Some(env.into())
    }

    #[wasm_bindgen_test]
    fn missing_env_uses_default() {
        let config = config_from_env(None);
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
    }

    #[wasm_bindgen_test]
    fn non_object_env_uses_default() {
        let config = config_from_env(Some(JsValue::from_str("https://api.example.com")));
        assert_eq!(config.api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(config_from_env(Some(JsValue::NULL)), ClientConfig::default());
    }

    #[wasm_bindgen_test]
    fn api_base_url_key_is_read() {
        let config = config_from_env(env_with(&[(
            API_BASE_URL_KEY,
            JsValue::from_str("https://api.example.com/"),
        )]));
        assert_eq!(config.message_url(), "https://api.example.com/message");
    }

    #[wasm_bindgen_test]
    fn legacy_key_is_read_when_primary_missing() {
        let config = config_from_env(env_with(&[(
            LEGACY_API_URL_KEY,
            JsValue::from_str("https://legacy.example.com"),
        )]));
        assert_eq!(config.api_base_url(), "https://legacy.example.com");
    }

    #[wasm_bindgen_test]
    fn missing_or_non_string_keys_use_default() {
        assert_eq!(config_from_env(env_with(&[])), ClientConfig::default());
        let config = config_from_env(env_with(&[(API_BASE_URL_KEY, JsValue::from_f64(42.0))]));
        assert_eq!(config, ClientConfig::default());
    }
}
