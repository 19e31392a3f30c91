//! Command-line argument parsing for the replay tool
//!
//! Supports:
//! - Replaying a grid fixture's own script
//! - Appending keystrokes from the command line
//! - Overriding the config file

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::replay::Step;

/// Drive a grid fixture through scripted input
#[derive(Parser, Debug)]
#[command(name = "cellgrid", version, about = "Replay input against a data grid")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Config file to use instead of ~/.config/cellgrid/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a fixture, replay its script, print the final state as JSON
    Replay {
        /// Grid fixture (YAML)
        #[arg(value_name = "FIXTURE")]
        fixture: PathBuf,

        /// Focus this cell first, as ROW,COL (0-indexed)
        #[arg(long, value_name = "ROW,COL")]
        focus: Option<String>,

        /// Keys to press after the fixture script, comma separated
        #[arg(long, value_name = "KEYS", value_delimiter = ',')]
        keys: Vec<String>,

        /// Skip the fixture's own script
        #[arg(long)]
        no_script: bool,
    },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    pub fixture: PathBuf,
    pub config: Option<PathBuf>,
    /// Steps to run before the fixture script
    pub prelude: Vec<Step>,
    /// Steps to run after the fixture script
    pub extra: Vec<Step>,
    pub run_script: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into a replay configuration
    pub fn into_config(self) -> Result<ReplayConfig, String> {
        let Command::Replay {
            fixture,
            focus,
            keys,
            no_script,
        } = self.command;

        let prelude = match focus {
            Some(focus) => {
                let (row, col) = parse_cell(&focus)?;
                vec![Step::Focus(row, col)]
            }
            None => Vec::new(),
        };

        let extra = keys
            .into_iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .map(Step::Key)
            .collect();

        Ok(ReplayConfig {
            fixture,
            config: self.config,
            prelude,
            extra,
            run_script: !no_script,
        })
    }
}

fn parse_cell(s: &str) -> Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("Expected ROW,COL, got '{}'", s))?;
    let row = row
        .trim()
        .parse()
        .map_err(|_| format!("Invalid row in '{}'", s))?;
    let col = col
        .trim()
        .parse()
        .map_err(|_| format!("Invalid column in '{}'", s))?;
    Ok((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(focus: Option<&str>, keys: &[&str], no_script: bool) -> CliArgs {
        CliArgs {
            command: Command::Replay {
                fixture: PathBuf::from("grid.yaml"),
                focus: focus.map(str::to_string),
                keys: keys.iter().map(|k| k.to_string()).collect(),
                no_script,
            },
            config: None,
        }
    }

    #[test]
    fn test_keys_become_steps() {
        let config = args(None, &["ctrl+left", " enter ", ""], false)
            .into_config()
            .unwrap();
        assert!(config.prelude.is_empty());
        assert_eq!(
            config.extra,
            vec![
                Step::Key("ctrl+left".to_string()),
                Step::Key("enter".to_string())
            ]
        );
        assert!(config.run_script);
    }

    #[test]
    fn test_focus_prelude() {
        let config = args(Some("2, 1"), &[], true).into_config().unwrap();
        assert_eq!(config.prelude, vec![Step::Focus(2, 1)]);
        assert!(!config.run_script);
    }

    #[test]
    fn test_bad_focus() {
        assert!(args(Some("2"), &[], false).into_config().is_err());
        assert!(args(Some("a,1"), &[], false).into_config().is_err());
    }

    #[test]
    fn test_parse_command_line() {
        let cli = CliArgs::try_parse_from([
            "cellgrid",
            "replay",
            "orders.yaml",
            "--keys",
            "down,ctrl+right",
            "--config",
            "alt.yaml",
        ])
        .unwrap();
        let config = cli.into_config().unwrap();
        assert_eq!(config.fixture, PathBuf::from("orders.yaml"));
        assert_eq!(config.config, Some(PathBuf::from("alt.yaml")));
        assert_eq!(config.extra.len(), 2);
    }
}
