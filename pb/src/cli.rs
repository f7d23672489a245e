//! CLI argument parsing for promptbuilder

use clap::{Parser, Subcommand};
use eyre::{Result, eyre};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pb")]
#[command(author, version, about = "CDM prompt template management", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available templates
    List,

    /// Print a template body
    Cat {
        /// Template name
        #[arg(required = true)]
        name: String,
    },

    /// Show the placeholders a template requires
    Placeholders {
        /// Template name
        #[arg(required = true)]
        name: String,
    },

    /// Render a template with substitutions
    Render {
        /// Template name
        #[arg(required = true)]
        name: String,

        /// Inline substitution (repeatable)
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Substitution read from a file (repeatable)
        #[arg(short = 'f', long = "set-file", value_name = "KEY=PATH")]
        set_file: Vec<String>,

        /// Write the rendered prompt to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

/// Split a KEY=VALUE argument at the first '='
pub fn parse_kv(arg: &str) -> Result<(&str, &str)> {
    arg.split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| eyre!("Expected KEY=VALUE, got: {}", arg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kv() {
        assert_eq!(parse_kv("DOMAIN=PlanBenefit").unwrap(), ("DOMAIN", "PlanBenefit"));
    }

    #[test]
    fn test_parse_kv_value_contains_equals() {
        assert_eq!(
            parse_kv("CONTEXT_HEADER=a=b").unwrap(),
            ("CONTEXT_HEADER", "a=b")
        );
    }

    #[test]
    fn test_parse_kv_empty_value() {
        assert_eq!(parse_kv("NOTES=").unwrap(), ("NOTES", ""));
    }

    #[test]
    fn test_parse_kv_rejects_missing_equals() {
        assert!(parse_kv("DOMAIN").is_err());
    }

    #[test]
    fn test_parse_kv_rejects_empty_key() {
        assert!(parse_kv("=value").is_err());
    }
}
