//! Property tests for the segmenting stream and the document parser

use annoseg_engine::*;
use proptest::prelude::*;
use std::sync::Arc;

/// Expansion that splits a line into words, or fails on lines containing '#'
fn words(line: String) -> std::result::Result<Vec<String>, String> {
    if line.contains('#') {
        return Err(line);
    }
    Ok(line.split_whitespace().map(str::to_string).collect())
}

fn sentence_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Z][a-z]{0,6}( [a-z]{1,6}){0,4}[.!?]", 0..6)
        .prop_map(|sentences| sentences.join(" "))
}

proptest! {
    #[test]
    fn stream_equals_flat_map(lines in prop::collection::vec("[a-z ]{0,20}", 0..20)) {
        let expected: Vec<String> = lines
            .iter()
            .flat_map(|line| line.split_whitespace().map(str::to_string))
            .collect();

        let stream = lines.into_iter().map(Ok::<_, String>).segment_with(words);
        let actual: Vec<String> = stream.map(|item| item.unwrap()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn stream_stops_after_first_error(lines in prop::collection::vec("[a-z #]{0,12}", 0..20)) {
        let mut stream = lines.clone().into_iter().map(Ok::<_, String>).segment_with(words);
        let mut errors = 0;
        while let Some(item) = stream.next() {
            if item.is_err() {
                errors += 1;
                prop_assert!(stream.next().is_none());
            }
        }

        let expected_errors = usize::from(lines.iter().any(|line| line.contains('#')));
        prop_assert_eq!(errors, expected_errors);
    }

    #[test]
    fn samples_have_valid_names(
        text in sentence_strategy(),
        raw in prop::collection::vec((0usize..200, 0usize..20), 0..10),
    ) {
        let char_len = text.chars().count();
        let mut document = AnnotatedDocument::new("prop", text.clone());
        for (start, len) in raw {
            let start = start.min(char_len);
            let end = (start + len).min(char_len);
            document = document.annotate("T", start, end);
        }

        for alignment in [AlignmentPolicy::Strict, AlignmentPolicy::Covering] {
            let config = ParserConfig::builder().alignment(alignment).build().unwrap();
            let parser = DocumentParser::for_language("en").unwrap().with_config(config);
            let (samples, report) = parser.parse_with_report(&document).unwrap();

            prop_assert_eq!(report.samples, samples.len());
            prop_assert_eq!(
                report.names + report.dropped(),
                document.annotations.len()
            );
            for (index, sample) in samples.iter().enumerate() {
                prop_assert_eq!(sample.clear_adaptive_data, index == 0);
                for name in &sample.names {
                    prop_assert!(name.start < name.end && name.end <= sample.tokens.len());
                }
            }
        }
    }

    #[test]
    fn shared_parser_is_deterministic(text in sentence_strategy()) {
        let parser = Arc::new(DocumentParser::for_language("en").unwrap());
        let document = AnnotatedDocument::new("d", text);
        let first = parser.parse(&document).unwrap();

        let handles: Vec<_> = (0..2)
            .map(|_| {
                let parser = Arc::clone(&parser);
                let document = document.clone();
                std::thread::spawn(move || parser.parse(&document).unwrap())
            })
            .collect();
        for handle in handles {
            prop_assert_eq!(handle.join().unwrap(), first.clone());
        }
    }
}
