//! Runtime configuration injected by the hosting page through `window.ENV`

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_THEME_NOTICE_DELAY_MS: u32 = 800;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL, without trailing slash
    pub api_url: String,
    /// Delay between the "switching" and "switched" theme notices
    pub theme_notice_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            theme_notice_delay_ms: DEFAULT_THEME_NOTICE_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// Load configuration from window.ENV, falling back to defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = read_env("API_URL").and_then(|v| v.as_string()) {
            config = config.with_api_url(&url);
        }
        if let Some(delay) = read_env("THEME_NOTICE_DELAY_MS").and_then(|v| {
            v.as_f64()
                .map(|n| n as u32)
                .or_else(|| v.as_string().and_then(|s| s.parse().ok()))
        }) {
            config.theme_notice_delay_ms = delay;
        }

        config
    }

    /// Replace the API URL, normalising away trailing slashes
    pub fn with_api_url(mut self, url: &str) -> Self {
        let trimmed = url.trim().trim_end_matches('/');
        if !trimmed.is_empty() {
            self.api_url = trimmed.to_string();
        }
        self
    }
}

#[cfg(target_arch = "wasm32")]
fn read_env(key: &str) -> Option<wasm_bindgen::JsValue> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let env = js_sys::Reflect::get(&window, &JsValue::from_str("ENV")).ok()?;
    if env.is_undefined() || env.is_null() {
        return None;
    }
    let value = js_sys::Reflect::get(&env, &JsValue::from_str(key)).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}

/// Native builds have no `window`
#[cfg(not(target_arch = "wasm32"))]
fn read_env(_key: &str) -> Option<wasm_bindgen::JsValue> {
    None
}
