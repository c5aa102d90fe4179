#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use logtally_core::types::FrequencyTable;
use logtally_log_pipeline::merge;

/// 퍼저용 구조적 입력: 빈도표 두 개
#[derive(Arbitrary, Debug)]
struct FuzzInput {
    left: Vec<(String, String, u16)>,
    right: Vec<(String, String, u16)>,
}

fn table(entries: &[(String, String, u16)]) -> FrequencyTable {
    // 항목 수 제한 (성능)
    entries
        .iter()
        .take(64)
        .map(|(c, s, n)| (c.as_str(), s.as_str(), u64::from(*n)))
        .collect()
}

fuzz_target!(|input: FuzzInput| {
    let a = table(&input.left);
    let b = table(&input.right);

    let ab = merge([&a, &b]);
    let ba = merge([&b, &a]);

    assert_eq!(ab, ba);
    assert_eq!(ab.total, a.sum() + b.sum());
    assert_eq!(merge([&ab.table, &FrequencyTable::new()]), ab);
});
