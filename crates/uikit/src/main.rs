// SPDX-FileCopyrightText: 2026 Uikit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! uikit - component registry server and installer.
//!
//! `uikit serve` publishes a component catalog over HTTP. `uikit add` fetches
//! one component into the current project and `uikit list` shows what the
//! registry offers.

mod add;
mod list;
mod serve;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use uikit_config::UikitConfig;
use uikit_core::UikitError;

/// uikit - component registry server and installer.
#[derive(Parser, Debug)]
#[command(name = "uikit", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Registry base URL (overrides `registry.url`).
    #[arg(long, global = true, value_name = "URL")]
    registry: Option<String>,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the registry service.
    Serve {
        /// Address to bind.
        #[arg(long)]
        host: Option<String>,
        /// Port to bind.
        #[arg(long)]
        port: Option<u16>,
        /// TOML catalog manifest to serve instead of the built-in catalog.
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },
    /// Install a component into the current project.
    Add {
        /// Component slug, e.g. `button`.
        slug: String,
        /// Destination directory.
        #[arg(long, value_name = "DIR")]
        path: Option<PathBuf>,
        /// File extension, without the dot.
        #[arg(long)]
        ext: Option<String>,
        /// Fail instead of replacing an existing file.
        #[arg(long, conflicts_with = "force")]
        no_overwrite: bool,
        /// Replace an existing file even if configuration says otherwise.
        #[arg(long)]
        force: bool,
    },
    /// List the components the registry offers.
    List {
        /// Print the raw listing as JSON.
        #[arg(long)]
        json: bool,
        /// Disable colors.
        #[arg(long)]
        plain: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => uikit_config::load_and_validate_path(path),
        None => uikit_config::load_and_validate(),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            uikit_config::render_errors(&errors);
            std::process::exit(1);
        }
    };
    if let Some(url) = cli.registry {
        config.registry.url = url;
    }

    let log_level = match (&cli.command, cli.verbose) {
        (_, true) => "debug".to_string(),
        (Commands::Serve { .. }, false) => config.logging.level.clone(),
        _ => "warn".to_string(),
    };
    init_tracing(&log_level);

    if let Err(e) = run(cli.command, config).await {
        print_error(&e);
        std::process::exit(1);
    }
}

async fn run(command: Commands, config: UikitConfig) -> Result<(), UikitError> {
    match command {
        Commands::Serve {
            host,
            port,
            catalog,
        } => serve::run_serve(config, host, port, catalog).await,
        Commands::Add {
            slug,
            path,
            ext,
            no_overwrite,
            force,
        } => {
            let overwrite = if force {
                true
            } else if no_overwrite {
                false
            } else {
                config.install.overwrite
            };
            add::run_add(&config, &slug, path, ext, overwrite).await
        }
        Commands::List { json, plain } => list::run_list(&config, json, plain).await,
    }
}

/// Initializes the tracing subscriber. Logs go to stderr so command output
/// on stdout stays clean.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("uikit={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

fn print_error(err: &UikitError) {
    if std::io::stderr().is_terminal() {
        use colored::Colorize;
        eprintln!("{} {err}", "✗".red());
    } else {
        eprintln!("error: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn add_parses_flags() {
        let cli = Cli::try_parse_from([
            "uikit", "--registry", "http://r:9", "add", "button", "--path", "out", "--ext", "jsx",
            "--no-overwrite",
        ])
        .unwrap();
        assert_eq!(cli.registry.as_deref(), Some("http://r:9"));
        match cli.command {
            Commands::Add {
                slug,
                path,
                ext,
                no_overwrite,
                force,
            } => {
                assert_eq!(slug, "button");
                assert_eq!(path, Some(PathBuf::from("out")));
                assert_eq!(ext.as_deref(), Some("jsx"));
                assert!(no_overwrite);
                assert!(!force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn no_overwrite_conflicts_with_force() {
        let result = Cli::try_parse_from(["uikit", "add", "button", "--no-overwrite", "--force"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["uikit", "list", "--json", "-v", "--config", "x.toml"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(cli.command, Commands::List { json: true, plain: false }));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["uikit"]).is_err());
    }

    #[test]
    fn default_config_is_valid() {
        let config = uikit_config::load_and_validate_str("").expect("defaults should be valid");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.install.path, "components");
    }
}
