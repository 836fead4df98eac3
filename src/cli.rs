// CLI module - command-line argument parsing and handlers
//
// Subcommands:
// - list: headless listing, prints the page and exits
// - token set|clear|show: manage the stored session token
// - config --show|--path|--reset: configuration management
//
// With no subcommand the terminal UI runs.

use crate::config::{Config, VERSION};
use crate::session::{FileTokenStore, TokenSource};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::Path;

/// adota - browse animals available for adoption
#[derive(Parser)]
#[command(name = "adota")]
#[command(version = VERSION)]
#[command(about = "Browse animals available for adoption", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the available animals once and exit
    List {
        /// Animal type, e.g. Cachorro or Gato
        #[arg(long = "type", value_name = "TYPE")]
        kind: Option<String>,

        /// Animal gender, e.g. Macho or Fêmea
        #[arg(long)]
        gender: Option<String>,

        /// Print the list as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Manage the stored session token
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

#[derive(Subcommand)]
pub enum TokenAction {
    /// Store a token issued by the adoption service
    Set { token: String },
    /// Remove the stored token
    Clear,
    /// Show where the token comes from (masked)
    Show,
}

/// Config commands that must work before (or without) a loadable config file.
/// Returns true if the command was handled (exit after).
///
/// `config --path` and `config --reset` are the way out of a broken
/// config.toml, so they never read it. `config --show` needs the merged
/// config and is left to [`handle_cli`].
pub fn handle_config_command(cli: &Cli) -> Result<bool> {
    let Some(Commands::Config { show, reset, path }) = &cli.command else {
        return Ok(false);
    };

    if *path {
        handle_config_path()?;
    } else if *show {
        return Ok(false);
    } else if *reset {
        handle_config_reset()?;
    } else {
        println!("Usage: adota config [--show|--reset|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --path    Show config file path");
    }
    Ok(true)
}

/// Handle management commands that need the loaded config. Returns true if a
/// command was handled (exit after).
///
/// `list` and the default TUI run need the full runtime, so they are left to
/// the caller.
pub fn handle_cli(cli: &Cli, config: &Config) -> Result<bool> {
    match &cli.command {
        Some(Commands::Config { show: true, path: false, .. }) => {
            handle_config_show(config);
            Ok(true)
        }
        Some(Commands::Config { .. }) => handle_config_command(cli),
        Some(Commands::Token { action }) => {
            handle_token(action, config)?;
            Ok(true)
        }
        Some(Commands::List { .. }) | None => Ok(false),
    }
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show(config: &Config) {
    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("api_url = {:?}", config.api_url);
    println!("request_timeout_secs = {}", config.request_timeout_secs);
    println!(
        "token_path = {:?}",
        config.token_path.display().to_string()
    );
    println!("theme = {:?}", config.theme);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!(
        "file_dir = {:?}",
        config.logging.file_dir.display().to_string()
    );
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());
    println!("file_prefix = {:?}", config.logging.file_prefix);

    println!();
    if config.demo_mode {
        println!("# ADOTA_DEMO is set: fixture animals, no network");
    }
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    if reset_config_at(&path, confirm_overwrite)? {
        println!("Config reset to defaults: {}", path.display());
    } else {
        println!("Aborted.");
    }
    Ok(())
}

fn confirm_overwrite(path: &Path) -> Result<bool> {
    eprint!(
        "Config file exists at {}. Overwrite? [y/N] ",
        path.display()
    );
    std::io::stderr().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Write the default config to `path`. The existing file is never parsed;
/// `confirm` is asked before overwriting it. Returns false if declined.
fn reset_config_at(path: &Path, confirm: impl FnOnce(&Path) -> Result<bool>) -> Result<bool> {
    if path.exists() && !confirm(path)? {
        return Ok(false);
    }

    Config::default()
        .save_to(path)
        .with_context(|| format!("Error writing config to {}", path.display()))?;
    Ok(true)
}

fn handle_token(action: &TokenAction, config: &Config) -> Result<()> {
    let store = FileTokenStore::new(config.token_path.clone());

    match action {
        TokenAction::Set { token } => {
            store.save(token)?;
            println!("Token saved to {}", store.path().display());
        }
        TokenAction::Clear => {
            store.clear()?;
            println!("Token removed");
        }
        TokenAction::Show => {
            if let Some(token) = &config.token_override {
                println!("{} (from ADOTA_TOKEN)", mask(token));
            } else if let Some(token) = store.token() {
                println!("{} (from {})", mask(&token), store.path().display());
            } else {
                println!("No token stored; requests are sent without authorization");
            }
        }
    }
    Ok(())
}

/// Keep only the edges of a secret visible
fn mask(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_short_and_long() {
        assert_eq!(mask("abc"), "***");
        assert_eq!(mask("eyJhbGciOiJIUzI1NiJ9.payload"), "eyJh…load");
    }

    #[test]
    fn test_list_flags_parse() {
        let cli = Cli::try_parse_from(["adota", "list", "--type", "Gato", "--gender", "Fêmea"])
            .unwrap();
        match cli.command {
            Some(Commands::List { kind, gender, json }) => {
                assert_eq!(kind.as_deref(), Some("Gato"));
                assert_eq!(gender.as_deref(), Some("Fêmea"));
                assert!(!json);
            }
            _ => panic!("Expected list command"),
        }
    }

    #[test]
    fn test_token_set_parses() {
        let cli = Cli::try_parse_from(["adota", "token", "set", "abc"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Token {
                action: TokenAction::Set { .. }
            })
        ));
    }

    fn broken_config(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_url = [broken\n").unwrap();
        assert!(Config::load_file_config(&path).is_err());
        path
    }

    #[test]
    fn test_reset_repairs_broken_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = broken_config(&dir);

        assert!(reset_config_at(&path, |_| Ok(true)).unwrap());

        let file = Config::load_file_config(&path).unwrap();
        let config = Config::from_sources(file, |_| None);
        assert_eq!(config.api_url, Config::default().api_url);
    }

    #[test]
    fn test_reset_declined_leaves_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = broken_config(&dir);

        assert!(!reset_config_at(&path, |_| Ok(false)).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "api_url = [broken\n");
    }

    #[test]
    fn test_reset_without_file_skips_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh").join("config.toml");

        let written = reset_config_at(&path, |_| panic!("nothing to overwrite")).unwrap();
        assert!(written);
        assert!(path.exists());
    }

    #[test]
    fn test_show_and_token_wait_for_loaded_config() {
        let cli = Cli::try_parse_from(["adota", "config", "--show"]).unwrap();
        assert!(!handle_config_command(&cli).unwrap());

        let cli = Cli::try_parse_from(["adota", "token", "show"]).unwrap();
        assert!(!handle_config_command(&cli).unwrap());
    }

    #[test]
    fn test_no_subcommand_runs_tui() {
        let cli = Cli::try_parse_from(["adota"]).unwrap();
        assert!(cli.command.is_none());
    }
}
