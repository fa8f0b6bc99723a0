//! CLI for topicreg
//!
//! Runs the command shell on stdin/stdout against a fresh in-memory registry.

use std::path::PathBuf;

use clap::Parser;
use topicreg::broker::Registry;
use topicreg::config::{load_config_from, Settings};
use topicreg::shell;
use topicreg::utils::logging;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "topicreg", about = "In-memory publish/subscribe registry shell")]
struct Args {
    /// Config file to load instead of config/default
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); overrides the config
    #[arg(long)]
    log_level: Option<String>,

    /// Prompt written before each command; overrides the config
    #[arg(long)]
    prompt: Option<String>,
}

fn main() {
    let args = Args::parse();

    let settings = match load_config_from(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            logging::init("warn");
            error!("Failed to load configuration: {}", e);
            std::process::exit(2);
        }
    };

    let settings = apply_overrides(settings, &args);
    logging::init(&settings.logging.level);

    if let Err(e) = run_shell(&settings) {
        error!("Shell failed: {}", e);
        std::process::exit(1);
    }
}

fn apply_overrides(mut settings: Settings, args: &Args) -> Settings {
    if let Some(level) = &args.log_level {
        settings.logging.level = level.clone();
    }
    if let Some(prompt) = &args.prompt {
        settings.shell.prompt = prompt.clone();
    }
    settings
}

fn run_shell(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = Registry::new();
    info!(prompt = %settings.shell.prompt, "shell started");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell::run(&mut registry, stdin.lock(), stdout, &settings.shell.prompt)?;

    info!(users = registry.user_count(), topics = registry.topic_count(), "shell finished");
    Ok(())
}
