// SPDX-License-Identifier: MPL-2.0
//! Where folio keeps its files.
//!
//! Two directories matter:
//! - the **config directory** holds `settings.toml` (user-editable preferences)
//! - the **data directory** holds `storage.toml` (the durable key-value store
//!   that remembers the selected locale between sessions)
//!
//! # Resolution Order
//!
//! 1. **Explicit override** passed to a `*_with_override()` function (tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) registered once via [`init_cli_overrides`]
//! 3. **Environment variables** (`FOLIO_DATA_DIR`, `FOLIO_CONFIG_DIR`), ignored when empty
//! 4. **Platform default** from the `dirs` crate with the application name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Folio";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "FOLIO_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "FOLIO_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Registers the directories given on the command line.
///
/// Only the first call has any effect; later calls are ignored so that
/// embedding code and tests cannot clobber what `main` registered.
pub fn init_cli_overrides(data_dir: Option<PathBuf>, config_dir: Option<PathBuf>) {
    let _ = CLI_DATA_DIR.set(data_dir);
    let _ = CLI_CONFIG_DIR.set(config_dir);
}

fn resolve_dir(
    override_path: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_var: &str,
    platform: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = cli.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory holding durable session storage.
///
/// Platform defaults:
/// - Linux: `~/.local/share/Folio/`
/// - macOS: `~/Library/Application Support/Folio/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\Folio\`
pub fn data_dir() -> Option<PathBuf> {
    data_dir_with_override(None)
}

pub fn data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_dir(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir)
}

/// Returns the directory holding `settings.toml`.
///
/// Platform defaults:
/// - Linux: `~/.config/Folio/`
/// - macOS: `~/Library/Application Support/Folio/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\Folio\`
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve_dir(override_path, &CLI_CONFIG_DIR, ENV_CONFIG_DIR, dirs::config_dir)
}
