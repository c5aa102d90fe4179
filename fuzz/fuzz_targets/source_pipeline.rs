#![no_main]

use std::sync::Arc;

use libfuzzer_sys::fuzz_target;
use logtally_core::config::DEFAULT_HANDLER_PATTERN;
use logtally_log_pipeline::{MarkerFilter, PatternExtractor, SourcePipeline};

fuzz_target!(|data: &[u8]| {
    let Ok(extractor) = PatternExtractor::new("handlers", DEFAULT_HANDLER_PATTERN) else {
        return;
    };
    let mut pipeline = SourcePipeline::new(
        Arc::new(MarkerFilter::new("django.request")),
        Arc::new(extractor),
    );

    let text = String::from_utf8_lossy(data);
    pipeline.process_lines(text.lines());
    let outcome = pipeline.finish();

    // 카운터와 집계 합계는 항상 일치
    assert!(outcome.stats.lines_matched <= outcome.stats.lines_relevant);
    assert!(outcome.stats.lines_relevant <= outcome.stats.lines_read);
    assert_eq!(outcome.stats.lines_matched, outcome.snapshot.total);
    assert_eq!(outcome.snapshot.table.sum(), outcome.snapshot.total);
});
