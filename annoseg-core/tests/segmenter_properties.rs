//! Property tests for the built-in segmenters

use annoseg_core::{
    RuleSentenceDetector, SentenceDetector, SimpleTokenizer, Tokenizer, WhitespaceTokenizer,
};
use proptest::prelude::*;

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[A-Za-z]{1,8}",
            "[0-9]{1,4}",
            Just(". ".to_string()),
            Just("! ".to_string()),
            Just(" ".to_string()),
            Just("\n\n".to_string()),
            Just("(".to_string()),
            Just(")".to_string()),
            Just("東京".to_string()),
            Just("。".to_string()),
            Just("Dr.".to_string()),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn sentence_spans_are_ordered_trimmed_and_in_bounds(text in text_strategy()) {
        for code in ["en", "ja"] {
            let detector = RuleSentenceDetector::for_language(code).unwrap();
            let spans = detector.sent_pos_detect(&text);

            let mut last_end = 0;
            for span in &spans {
                prop_assert!(span.start >= last_end);
                prop_assert!(span.start < span.end);
                prop_assert!(span.end <= text.len());
                prop_assert!(text.is_char_boundary(span.start));
                prop_assert!(text.is_char_boundary(span.end));
                let covered = span.covered_text(&text);
                prop_assert_eq!(covered, covered.trim());
                last_end = span.end;
            }
        }
    }

    #[test]
    fn sentences_cover_all_non_whitespace(text in text_strategy()) {
        let detector = RuleSentenceDetector::for_language("en").unwrap();
        let joined: String = detector.sent_detect(&text).concat();
        let expected: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let actual: String = joined.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn tokens_never_contain_whitespace(text in text_strategy()) {
        for spans in [
            SimpleTokenizer::new().tokenize_pos(&text),
            WhitespaceTokenizer.tokenize_pos(&text),
        ] {
            let mut last_end = 0;
            for span in spans {
                prop_assert!(span.start >= last_end && span.start < span.end);
                prop_assert!(!span.covered_text(&text).chars().any(char::is_whitespace));
                last_end = span.end;
            }
        }
    }
}
