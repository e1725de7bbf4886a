//! Integration tests for language rules loaded from files

use annoseg_core::{
    available_languages, get_rules, CoreError, LanguageRules, RuleSentenceDetector,
    SentenceDetector,
};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

const GERMAN: &str = r#"
[metadata]
code = "de"
name = "German"

[terminators]
chars = [".", "!", "?"]

[closers]
chars = ["“", "\""]

[enclosures]
pairs = [{ open = "(", close = ")" }]

[abbreviations]
common = ["z.B", "bzw", "usw", "Nr"]

[exceptions]
patterns = ['\d\.$']
"#;

fn write_config(source: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(source.as_bytes()).unwrap();
    file
}

#[test]
fn test_external_rules_from_file() {
    let file = write_config(GERMAN);
    let rules = LanguageRules::from_file(file.path()).unwrap();
    assert_eq!(rules.code(), "de");

    let detector = RuleSentenceDetector::new(Arc::new(rules));
    let text = "Er kam z.B. am 3. Mai an. Sie blieb bzw. ging nicht.";
    assert_eq!(
        detector.sent_detect(text),
        vec!["Er kam z.B. am 3. Mai an.", "Sie blieb bzw. ging nicht."]
    );
}

#[test]
fn test_invalid_file_reports_parse_error() {
    let file = write_config("[metadata\ncode = ");
    let err = LanguageRules::from_file(file.path()).unwrap_err();
    assert!(matches!(err, CoreError::ConfigParse(_)));
}

#[test]
fn test_invalid_regex_in_file() {
    let broken = GERMAN.replace(r"'\d\.$'", "'(unclosed'");
    let file = write_config(&broken);
    let err = LanguageRules::from_file(file.path()).unwrap_err();
    assert!(matches!(err, CoreError::InvalidPattern { .. }));
}

#[test]
fn test_builtin_english_end_to_end() {
    let detector = RuleSentenceDetector::for_language("english").unwrap();
    let text = "Dr. Smith works at Apple Inc. in the U.S. every day. \
                He said \"Done!\" Then (after lunch. really.) he left...";
    let sentences = detector.sent_detect(text);
    assert_eq!(
        sentences,
        vec![
            "Dr. Smith works at Apple Inc. in the U.S. every day.",
            "He said \"Done!\"",
            "Then (after lunch. really.) he left...",
        ]
    );
}

#[test]
fn test_builtin_japanese_quotes() {
    let detector = RuleSentenceDetector::for_language("ja").unwrap();
    let text = "彼は「明日行く。必ず行く！」と言った。本当？";
    assert_eq!(
        detector.sent_detect(text),
        vec!["彼は「明日行く。必ず行く！」と言った。", "本当？"]
    );
}

#[test]
fn test_every_builtin_language_loads() {
    for (code, name) in available_languages() {
        let by_code = get_rules(code).unwrap();
        let by_name = get_rules(name).unwrap();
        assert!(Arc::ptr_eq(&by_code, &by_name));
    }
}
