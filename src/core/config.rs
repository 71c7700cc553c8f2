use std::env;

use crate::conversation::DEFAULT_CONTEXT_WINDOW;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub storage_path: String,
    pub db_path: String,
    pub catalog_path: String,
    pub advisor_url: String,
    pub advisor_model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    // Number of prior turns sent along with a follow-up question
    pub context_window: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        let storage_path = env::var("ADVISOR_STORAGE_PATH").unwrap_or("./".to_string());
        let db_path = env::var("ADVISOR_DB_PATH")
            .unwrap_or_else(|_| format!("{}/db/advisor.sqlite", storage_path));
        let catalog_path = env::var("ADVISOR_CATALOG_PATH")
            .unwrap_or_else(|_| format!("{}/data/products.json", storage_path));
        let advisor_url = env::var("ADVISOR_PROXY_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8787/".to_string());
        let advisor_model =
            env::var("ADVISOR_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let temperature = env::var("ADVISOR_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.7);
        let max_tokens = env::var("ADVISOR_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1000);
        let context_window = env::var("ADVISOR_CONTEXT_WINDOW")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CONTEXT_WINDOW);

        Self {
            storage_path,
            db_path,
            catalog_path,
            advisor_url,
            advisor_model,
            temperature,
            max_tokens,
            context_window,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_window() {
        if env::var("ADVISOR_CONTEXT_WINDOW").is_err() {
            assert_eq!(AppConfig::default().context_window, DEFAULT_CONTEXT_WINDOW);
        }
    }
}
