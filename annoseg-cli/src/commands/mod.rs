//! CLI command implementations

use crate::output::OutputFormat;
use annoseg_core::available_languages;
use clap::Subcommand;

pub mod convert;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert brat corpora into name finder training samples
    Convert(convert::ConvertArgs),

    /// Validate a language configuration file
    Validate(validate::ValidateArgs),

    /// Generate a language configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available language rules
    Languages,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) {
        for line in self.lines() {
            println!("{line}");
        }
    }

    fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Languages => {
                let mut lines = vec!["Built-in languages:".to_string()];
                lines.extend(
                    available_languages()
                        .into_iter()
                        .map(|(code, name)| format!("  {code:<4} {name}")),
                );
                lines
            }
            ListCommands::Formats => {
                let mut lines = vec!["Output formats:".to_string()];
                lines.extend(
                    OutputFormat::descriptions()
                        .into_iter()
                        .map(|(name, description)| format!("  {name:<8} {description}")),
                );
                lines
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Languages,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Languages"));
    }

    #[test]
    fn test_list_languages() {
        let lines = ListCommands::Languages.lines();
        assert_eq!(lines[0], "Built-in languages:");
        assert!(lines.iter().any(|line| line.contains("en") && line.contains("english")));
        assert!(lines.iter().any(|line| line.contains("ja") && line.contains("japanese")));
    }

    #[test]
    fn test_list_formats() {
        let lines = ListCommands::Formats.lines();
        assert_eq!(lines.len(), 4);
        for format in ["opennlp", "json", "conll"] {
            assert!(lines.iter().any(|line| line.trim_start().starts_with(format)));
        }
    }
}
