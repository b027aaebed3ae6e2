use std::path::{Path, PathBuf};

use crate::paths;

/// Local config file name, looked up in the current working directory
pub const LOCAL_CONFIG_FILE: &str = ".tally.toml";

/// Config locations in lookup order
///
/// 1. `.tally.toml` in the current working directory
/// 2. `config.toml` in the platform config directory (see [`paths`])
pub fn config_search_paths() -> Vec<PathBuf> {
    let mut search = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    match paths::app_config_path() {
        Ok(path) => search.push(path),
        Err(e) => log::debug!("No config directory available: {}", e),
    }
    search
}

/// Content of the first readable file in `search`, None if there is none
pub fn load_config_file_from<P: AsRef<Path>>(search: &[P]) -> Option<String> {
    search.iter().find_map(|path| read_config(path.as_ref()))
}

fn read_config(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(e) => {
            log::trace!("Skipping config {}: {}", path.display(), e);
            None
        }
    }
}
