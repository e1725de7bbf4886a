//! `validate`: load a language rules file and report problems

use annoseg_core::{LanguageRules, RuleSentenceDetector, SentenceDetector};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Rules file to check
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,

    /// Split this text with the rules and print the sentences
    #[arg(short, long, value_name = "TEXT")]
    pub sample: Option<String>,
}

impl ValidateArgs {
    /// Check the file; fails if it cannot be loaded
    pub fn execute(&self) -> Result<()> {
        let path = self.language_config.display();

        let rules = match LanguageRules::from_file(&self.language_config) {
            Ok(rules) => rules,
            Err(e) => {
                println!("✗ {path} is invalid: {e}");
                return Err(e).with_context(|| format!("Validation of {path} failed"));
            }
        };

        println!("✓ {path} is valid");
        println!("  {} ({})", rules.name(), rules.code());

        if let Some(text) = &self.sample {
            for (index, sentence) in split(rules, text).iter().enumerate() {
                println!("  [{}] {sentence}", index + 1);
            }
        }
        Ok(())
    }
}

fn split(rules: LanguageRules, text: &str) -> Vec<&str> {
    RuleSentenceDetector::new(Arc::new(rules))
        .sent_pos_detect(text)
        .iter()
        .map(|span| &text[span.start..span.end])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL: &str = "[metadata]\ncode = \"xx\"\nname = \"Minimal\"\n\n[terminators]\nchars = [\".\"]\n\n[abbreviations]\ntitles = [\"Dr\"]\n";

    fn rules_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn args(file: &NamedTempFile, sample: Option<&str>) -> ValidateArgs {
        ValidateArgs {
            language_config: file.path().to_path_buf(),
            sample: sample.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_rules_with_sample() {
        let file = rules_file(MINIMAL);
        assert!(args(&file, Some("Dr. Who came. He left.")).execute().is_ok());
    }

    #[test]
    fn test_split_uses_rules() {
        let rules = LanguageRules::from_toml_str(MINIMAL).unwrap();
        assert_eq!(
            split(rules, "Dr. Who came. He left."),
            vec!["Dr. Who came.", "He left."]
        );
    }

    #[test]
    fn test_empty_code_rejected() {
        let file = rules_file(&MINIMAL.replace("\"xx\"", "\"\""));
        let err = args(&file, None).execute().unwrap_err();
        assert!(err.to_string().starts_with("Validation of"));
    }

    #[test]
    fn test_missing_file() {
        let args = ValidateArgs {
            language_config: PathBuf::from("/nonexistent/rules.toml"),
            sample: None,
        };
        assert!(args.execute().is_err());
    }
}
