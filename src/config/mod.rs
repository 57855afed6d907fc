//! Configuration module.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig,
};

/// Build the key bindings for a resolved configuration.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidKeyBinding`] if an override cannot be applied.
pub fn key_bindings(config: &ResolvedConfig) -> Result<KeyBindings, ConfigError> {
    KeyBindings::default().with_overrides(&config.keybindings)
}
