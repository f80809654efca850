static PROJECT_DIRS: once_cell::sync::Lazy<Option<directories::ProjectDirs>> =
    once_cell::sync::Lazy::new(|| {
        directories::ProjectDirs::from("", "", "promptline")
    });

pub fn config_file() -> std::path::PathBuf {
    config_dir().join("config.toml")
}

// without a home directory, fall back to the working directory
fn config_dir() -> std::path::PathBuf {
    PROJECT_DIRS.as_ref().map_or_else(
        || std::path::PathBuf::from("."),
        |dirs| dirs.config_dir().to_path_buf(),
    )
}
