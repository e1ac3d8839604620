//! Configuration module.
//!
//! Settings resolve through Defaults → Config File → Env Vars → CLI Args,
//! then get range-checked by [`validate`].

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    CliOverrides, ConfigError, ConfigFile, MAX_FPS, ResolvedConfig, apply_cli_overrides,
    apply_env_overrides, default_config_path, default_log_path, load_config_file,
    load_config_with_precedence, merge_config, validate,
};
