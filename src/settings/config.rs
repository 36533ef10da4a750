use std::path::{Path, PathBuf};

const APP_FOLDER: &str = "posts";

pub fn get_config_folder() -> PathBuf {
    config_folder_from(|key| std::env::var_os(key))
}

pub fn get_config_file() -> PathBuf {
    get_config_folder().join("config.toml")
}

#[cfg(target_family = "unix")]
fn config_folder_from(env: impl Fn(&str) -> Option<std::ffi::OsString>) -> PathBuf {
    if let Some(xdg) = env("XDG_CONFIG_HOME").filter(|p| !p.is_empty()) {
        return Path::new(&xdg).join(APP_FOLDER);
    }
    match env("HOME") {
        Some(home) => Path::new(&home).join(".config").join(APP_FOLDER),
        None => PathBuf::from(APP_FOLDER),
    }
}

#[cfg(not(target_family = "unix"))]
fn config_folder_from(env: impl Fn(&str) -> Option<std::ffi::OsString>) -> PathBuf {
    match env("APPDATA") {
        Some(app_data) => Path::new(&app_data).join(APP_FOLDER),
        None => PathBuf::from(APP_FOLDER),
    }
}
