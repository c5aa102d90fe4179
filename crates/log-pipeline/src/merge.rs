//! 스냅샷 병합
//!
//! 여러 소스의 빈도표를 하나로 합칩니다. 빈 표를 항등원으로 하는 순수 fold이며
//! 결합법칙과 교환법칙을 만족하므로 워커 완료 순서나 분할 방식과 무관하게
//! 같은 결과를 냅니다. 입력은 변경하지 않습니다.

use logtally_core::types::{FrequencyTable, Snapshot};

/// 빈도표 목록을 병합하여 새 스냅샷을 반환합니다.
///
/// 합계는 병합 과정에서 더해진 모든 슬롯 값의 합입니다.
pub fn merge<'a, I>(tables: I) -> Snapshot
where
    I: IntoIterator<Item = &'a FrequencyTable>,
{
    let mut merged = FrequencyTable::new();
    let mut total = 0u64;

    for table in tables {
        for (category, levels) in table.iter() {
            for (level, count) in levels {
                merged.increment(category, level, *count);
                total += count;
            }
        }
    }

    Snapshot {
        table: merged,
        total,
    }
}

/// 스냅샷 목록을 병합합니다.
pub fn merge_snapshots<'a, I>(snapshots: I) -> Snapshot
where
    I: IntoIterator<Item = &'a Snapshot>,
{
    merge(snapshots.into_iter().map(|s| &s.table))
}
