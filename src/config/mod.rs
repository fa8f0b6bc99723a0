mod settings;

use std::path::Path;

use config::{Config, ConfigError, Environment, File};

use settings::PartialSettings;

pub use settings::{LogSettings, Settings, ShellSettings};

/// Prefix of environment overrides, e.g. `TOPICREG_LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "TOPICREG";

/// Loads the configuration from the optional `config/default` file and
/// environment variables, merged over the built-in defaults.
pub fn load_config() -> Result<Settings, ConfigError> {
    load_config_from(None)
}

/// Like `load_config`, but an explicit `path` replaces `config/default` and
/// must exist.
pub fn load_config_from(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let file = match path {
        Some(p) => File::from(p).required(true),
        None => File::with_name("config/default").required(false),
    };

    let config = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let partial: PartialSettings = config.try_deserialize()?;
    Ok(partial.merge_with_defaults())
}

#[cfg(test)]
mod tests;
