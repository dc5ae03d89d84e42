//! The `rook` command line interface.
//!
//! Renders the configuration a Rook storage daemon pod is started with, so
//! that it can be inspected or applied by hand.
//!
//! # Examples
//!
//! ```bash
//! # Print the image a daemon would run
//! rook image --version v0.4.0
//!
//! # Print the environment injected into every daemon container
//! rook env --output json
//!
//! # Render a monitor pod kept off hosts that already run a monitor
//! rook manifest --pod-name rook-ceph-mon0 --namespace rook-ceph --app mon
//! ```

mod env;
pub mod error;
mod image;
mod internal;
mod manifest;

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

pub use self::error::Error;
use self::{
    env::EnvCommand, image::ImageCommand, internal::write_stdout, manifest::ManifestCommand,
};
use crate::{config::Config, shadow};

/// Main entry point of the Rook command line interface.
#[derive(Parser)]
#[command(
    name = rook_base::CLI_PROGRAM_NAME,
    author,
    version,
    long_version = shadow::CLAP_LONG_VERSION,
    about = "Rook: render pod configuration for Rook storage daemons.",
    color = clap::ColorChoice::Auto
)]
pub struct Cli {
    #[clap(subcommand)]
    commands: Option<Commands>,

    /// Path to the configuration file.
    #[clap(
        long = "config",
        short = 'c',
        env = "ROOK_CONFIG_FILE_PATH",
        help = "Specify a configuration file. Defaults to ~/.config/rook/config.yaml or \
                ROOK_CONFIG_FILE_PATH env var."
    )]
    config_file: Option<PathBuf>,

    #[clap(
        long = "log-level",
        env = "ROOK_LOG_LEVEL",
        help = "Set the logging level (e.g., info, debug, trace)."
    )]
    log_level: Option<tracing::Level>,
}

#[allow(variant_size_differences)]
#[derive(Clone, Subcommand)]
pub enum Commands {
    #[command(about = "Display client version information")]
    Version,

    #[command(about = "Generate shell completion script for the specified shell (bash, zsh, fish)")]
    Completions { shell: clap_complete::Shell },

    #[command(about = "Output the default configuration in YAML format")]
    DefaultConfig,

    #[command(alias = "i", about = "Print the Rook image reference for a version")]
    Image(ImageCommand),

    #[command(alias = "e", about = "Print the environment variables injected into Rook daemons")]
    Env(EnvCommand),

    #[command(
        alias = "m",
        about = "Render a Rook daemon pod with config override, environment and anti-affinity"
    )]
    Manifest(ManifestCommand),
}

impl Default for Cli {
    fn default() -> Self { Self::parse() }
}

impl Cli {
    /// Loads the configuration file given on the command line, or the first
    /// one found in the default locations. Without any file the defaults are
    /// used. `--log-level` overrides the level from the file.
    fn load_config(&self) -> Result<Config, Error> {
        let config_file = self.config_file.clone().or_else(Config::search_config_file_path);
        let mut config = match config_file {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(log_level) = self.log_level {
            config.log.level = log_level;
        }

        Ok(config)
    }

    /// Runs the selected command and returns the process exit code.
    ///
    /// # Errors
    ///
    /// Returns an `Error` if the configuration cannot be loaded, the output
    /// cannot be rendered or written, or pod configuration fails to build.
    pub fn run(self) -> Result<i32, Error> {
        match self.commands {
            Some(Commands::Version) => {
                let client_version = Self::command().get_version().unwrap_or_default().to_string();
                write_stdout(Self::command().render_long_version())?;
                write_stdout(format!("Client Version: {client_version}\n"))?;
                return Ok(0);
            }
            Some(Commands::Completions { shell }) => {
                let mut app = Self::command();
                let bin_name = app.get_name().to_string();
                clap_complete::generate(shell, &mut app, bin_name, &mut std::io::stdout());
                return Ok(0);
            }
            Some(Commands::DefaultConfig) => {
                write_stdout(Config::template_basic()?)?;
                return Ok(0);
            }
            _ => {}
        }

        let config = self.load_config()?;
        config.log.registry();

        match self.commands {
            Some(Commands::Image(cmd)) => cmd.run(&config)?,
            Some(Commands::Env(cmd)) => cmd.run(&config)?,
            Some(Commands::Manifest(cmd)) => cmd.run(&config)?,
            _ => {
                eprint!("{}", Self::command().render_long_help().ansi());
                return Ok(-1);
            }
        }

        Ok(0)
    }
}
