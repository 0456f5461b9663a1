mod manager;

pub use manager::{
    AppConfig, ConfigFile, ConfigManager, ProviderConfig, ResolveOptions, ResolvedConfig,
    resolve_config,
};
