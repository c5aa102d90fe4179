#![no_main]

use libfuzzer_sys::fuzz_target;
use logtally_core::config::DEFAULT_HANDLER_PATTERN;
use logtally_core::pipeline::FieldExtractor;
use logtally_log_pipeline::PatternExtractor;

fuzz_target!(|data: &[u8]| {
    let line = String::from_utf8_lossy(data);
    let Ok(extractor) = PatternExtractor::new("handlers", DEFAULT_HANDLER_PATTERN) else {
        return;
    };

    // 추출은 어떤 입력에도 패닉 없이 끝나야 함
    let detailed = extractor.extract_detailed(&line);
    if let Some(extraction) = &detailed {
        let pair = &extraction.pair;
        assert!(!pair.subcategory.is_empty());
        assert!(!pair.category.is_empty());
        assert!(!pair.category.chars().any(char::is_whitespace));
        assert!(line.contains(pair.category.as_str()));
    }
    assert_eq!(extractor.extract(&line), detailed.map(|e| e.pair));
});
