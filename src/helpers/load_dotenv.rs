use std::env;
use std::path::PathBuf;

use crate::constants::envvars;

/// Loads `.env` from the working directory, plus the file named by
/// `FIWARE_SETUP_ENV_FILE` if set. Returns the paths that were loaded.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();
    if let Ok(path) = dotenv::dotenv() {
        loaded.push(path);
    }
    if let Ok(env_file) = env::var(envvars::ENV_FILE) {
        if dotenv::from_path(&env_file).is_ok() {
            loaded.push(PathBuf::from(env_file));
        }
    }
    loaded
}
