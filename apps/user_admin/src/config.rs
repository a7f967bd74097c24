use std::{collections::HashMap, fs, path::Path};

use crate::controller::{sync::SyncPolicy, user_list::ControllerOptions};

pub const DEFAULT_CONFIG_PATH: &str = "user_admin.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub users_url: String,
    pub request_timeout_secs: u64,
    pub clear_stale_errors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            users_url: "https://jsonplaceholder.typicode.com/users".into(),
            request_timeout_secs: 10,
            clear_stale_errors: true,
        }
    }
}

impl Settings {
    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            sync_policy: SyncPolicy::RefetchAll,
            clear_stale_errors: self.clear_stale_errors,
        }
    }
}

/// Defaults, then the optional toml file, then environment variables.
pub fn load_settings(config_path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(config_path) {
        apply_file_overrides(&mut settings, &raw);
    }
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());

    settings
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) else {
        tracing::warn!("ignoring config file: expected a flat table of strings");
        return;
    };

    if let Some(v) = file_cfg.get("users_url") {
        settings.users_url = v.clone();
    }
    if let Some(v) = file_cfg.get("request_timeout_secs") {
        set_parsed(&mut settings.request_timeout_secs, "request_timeout_secs", v);
    }
    if let Some(v) = file_cfg.get("clear_stale_errors") {
        set_parsed(&mut settings.clear_stale_errors, "clear_stale_errors", v);
    }
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("USER_ADMIN_USERS_URL") {
        settings.users_url = v;
    }
    if let Some(v) = lookup("APP__USERS_URL") {
        settings.users_url = v;
    }
    if let Some(v) = lookup("APP__REQUEST_TIMEOUT_SECS") {
        set_parsed(&mut settings.request_timeout_secs, "APP__REQUEST_TIMEOUT_SECS", &v);
    }
    if let Some(v) = lookup("APP__CLEAR_STALE_ERRORS") {
        set_parsed(&mut settings.clear_stale_errors, "APP__CLEAR_STALE_ERRORS", &v);
    }
}

fn set_parsed<T: std::str::FromStr>(slot: &mut T, key: &str, raw: &str) {
    match raw.trim().parse::<T>() {
        Ok(parsed) => *slot = parsed,
        Err(_) => tracing::warn!(key, value = raw, "ignoring unparseable setting"),
    }
}
