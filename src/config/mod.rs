// Configuration module for WrathBot
// Handles loading and managing controller tuning from a TOML file

pub mod loader;
pub mod types;

pub use loader::{create_default_config, get_config_path, load_config, load_config_from};
pub use types::{
    ColorConfig, Config, DetectorConfig, MovementConfig, RulesConfig, TargetingConfig, WallConfig,
};
