use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Origin of the model API (e.g. "http://localhost:5000"); `None` posts
    /// to the page's own origin
    pub api_origin: Option<String>,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_origin: None,
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from window location and localStorage overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(origin)) = storage.get_item("dairyfeed_api_origin") {
                    let origin = origin.trim_end_matches('/').to_string();
                    if !origin.is_empty() {
                        settings.api_origin = Some(origin);
                    }
                }

                if let Ok(Some(log_level)) = storage.get_item("dairyfeed_log_level") {
                    settings.log_level = parse_level(&log_level).unwrap_or(settings.log_level);
                }
            }
        }

        settings
    }

    /// Full URL for an API path such as `/api/predict`
    pub fn api_url(&self, path: &str) -> String {
        match &self.api_origin {
            Some(origin) => format!("{}{}", origin, path),
            None => path.to_string(),
        }
    }
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_origin_by_default() {
        assert_eq!(AppSettings::default().api_url("/api/predict"), "/api/predict");
    }

    #[test]
    fn test_explicit_origin_is_prefixed() {
        let settings = AppSettings {
            api_origin: Some("http://localhost:5000".to_string()),
            ..AppSettings::default()
        };
        assert_eq!(settings.api_url("/api/optimize"), "http://localhost:5000/api/optimize");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("WARN"), Some(Level::Warn));
        assert_eq!(parse_level("loud"), None);
    }
}
