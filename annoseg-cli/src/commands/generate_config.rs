//! `generate-config`: write a starter language rules file

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

const CODE_PLACEHOLDER: &str = "@CODE@";

const TEMPLATE: &str = r#"# Sentence boundary rules for @CODE@

[metadata]
code = "@CODE@"
name = "Custom Language"

# Sentence-ending characters
[terminators]
chars = [".", "!", "?"]
# Only end a sentence when the terminator is followed by whitespace
require_whitespace = true

# Quotes and brackets that stay with the sentence they close
[closers]
chars = ['"', "'", ")", "]"]

# Terminators inside an open pair never end a sentence
[enclosures]
pairs = [
    { open = "(", close = ")" },
    { open = "[", close = "]" },
]

# Words that keep their trailing dot; category names are free-form
[abbreviations]
titles = ["Dr", "Mr", "Mrs", "Ms", "Prof"]
business = ["Inc", "Corp", "Ltd", "Co"]
latin = ["etc", "vs", "e.g", "i.e"]

# Regexes matched against the text ending right after a terminator;
# a match suppresses the boundary
[exceptions]
patterns = [
    # Single capital initials: "J. Smith"
    '(?:^|\s)\p{Lu}\.$',
]

[paragraphs]
break_on_blank_lines = true
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Code written to `[metadata]`, e.g. `de`
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Where to write the template
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Write the template and print how to use it
    pub fn execute(&self) -> Result<()> {
        fs::write(&self.output, self.render())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        let path = self.output.display();
        println!(
            "✓ Wrote rules template for '{}' to {path}",
            self.language_code
        );
        println!();
        println!("Edit terminators, abbreviations and exceptions, then check the file:");
        println!("  annoseg validate --language-config {path} --sample \"Some text. More text.\"");
        println!("and convert a corpus with it:");
        println!("  annoseg convert --data corpus/ --language-config {path}");

        Ok(())
    }

    fn render(&self) -> String {
        TEMPLATE.replace(CODE_PLACEHOLDER, &self.language_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use annoseg_core::LanguageRules;
    use tempfile::TempDir;

    fn args(code: &str, output: PathBuf) -> GenerateConfigArgs {
        GenerateConfigArgs {
            language_code: code.to_string(),
            output,
        }
    }

    #[test]
    fn test_rendered_template_loads() {
        let rendered = args("de", PathBuf::from("de.toml")).render();
        assert!(!rendered.contains(CODE_PLACEHOLDER));

        let rules = LanguageRules::from_toml_str(&rendered).unwrap();
        assert_eq!(rules.code(), "de");
        assert_eq!(rules.name(), "Custom Language");
        assert!(rules.is_terminator('?'));
        assert!(rules.is_closer(')'));
        assert!(rules.is_abbreviation("Prof.", 4));
    }

    #[test]
    fn test_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rules.toml");

        args("nl", path.clone()).execute().unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("code = \"nl\""));
    }

    #[test]
    fn test_unwritable_output() {
        let target = PathBuf::from("/nonexistent/dir/rules.toml");
        let err = args("xx", target).execute().unwrap_err();
        assert!(err.to_string().contains("Failed to write to"));
    }
}
