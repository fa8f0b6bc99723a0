use serde::Deserialize;

/// Top-level configuration settings for the application.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    pub shell: ShellSettings,
    pub logging: LogSettings,
}

/// Configuration for the interactive command shell.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ShellSettings {
    /// Written before each line is read.
    pub prompt: String,
}

/// Configuration for the tracing subscriber.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
}

/// Partial configuration settings loaded from files or environment.
///
/// Missing values are filled from `Settings::default()`.
#[derive(Debug, Default, Deserialize)]
pub struct PartialSettings {
    pub shell: Option<PartialShellSettings>,
    pub logging: Option<PartialLogSettings>,
}

#[derive(Debug, Deserialize)]
pub struct PartialShellSettings {
    pub prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PartialLogSettings {
    pub level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shell: ShellSettings {
                prompt: "> ".to_string(),
            },
            logging: LogSettings {
                level: "warn".to_string(),
            },
        }
    }
}

impl PartialSettings {
    /// Overlay the values present here on top of `Settings::default()`.
    pub fn merge_with_defaults(self) -> Settings {
        let default = Settings::default();

        Settings {
            shell: ShellSettings {
                prompt: self
                    .shell
                    .and_then(|s| s.prompt)
                    .unwrap_or(default.shell.prompt),
            },
            logging: LogSettings {
                level: self
                    .logging
                    .and_then(|l| l.level)
                    .unwrap_or(default.logging.level),
            },
        }
    }
}
