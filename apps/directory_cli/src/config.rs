use std::{collections::HashMap, fs, path::PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub providers_path: Option<PathBuf>,
    pub base_url: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            providers_path: None,
            base_url: "http://localhost:3000/".into(),
            log_filter: "info".into(),
        }
    }
}

/// Defaults, then `directory.toml` in the working directory, then the
/// environment.
///
/// A `directory.toml` that fails to parse is skipped; its error is handed
/// back so it can be logged once a subscriber exists.
pub fn load_settings() -> (Settings, Option<toml::de::Error>) {
    let file = fs::read_to_string("directory.toml").ok();
    settings_from(file.as_deref(), |key| std::env::var(key).ok())
}

pub(crate) fn settings_from(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> (Settings, Option<toml::de::Error>) {
    let mut settings = Settings::default();
    let mut file_error = None;

    if let Some(raw) = file {
        match toml::from_str::<HashMap<String, String>>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("providers_path") {
                    settings.providers_path = Some(PathBuf::from(v));
                }
                if let Some(v) = file_cfg.get("base_url") {
                    settings.base_url = v.clone();
                }
                if let Some(v) = file_cfg.get("log_filter") {
                    settings.log_filter = v.clone();
                }
            }
            Err(err) => file_error = Some(err),
        }
    }

    if let Some(v) = env("DIRECTORY_PROVIDERS") {
        settings.providers_path = Some(PathBuf::from(v));
    }
    if let Some(v) = env("APP__PROVIDERS_PATH") {
        settings.providers_path = Some(PathBuf::from(v));
    }

    if let Some(v) = env("DIRECTORY_BASE_URL") {
        settings.base_url = v;
    }
    if let Some(v) = env("APP__BASE_URL") {
        settings.base_url = v;
    }

    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    (settings, file_error)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
