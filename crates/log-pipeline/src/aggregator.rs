//! 소스별 집계기
//!
//! [`Aggregator`]는 워커 하나가 단독으로 소유하는 가변 집계 상태입니다.
//! 공유되지 않으므로 잠금이 필요 없고, 소스 처리가 끝나면 [`Aggregator::finish`]로
//! 불변 [`Snapshot`]이 되어 병합 단계로 넘어갑니다.

use logtally_core::types::{ExtractedPair, FrequencyTable, Snapshot};

/// 추출 결과를 2단계 빈도표와 누적 합계로 모읍니다.
#[derive(Debug, Default)]
pub struct Aggregator {
    table: FrequencyTable,
    total: u64,
}

impl Aggregator {
    /// 빈 집계기를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// (category, subcategory) 슬롯과 합계를 각각 1 증가시킵니다.
    pub fn add(&mut self, category: &str, subcategory: &str) {
        self.table.increment(category, subcategory, 1);
        self.total += 1;
    }

    /// 추출 결과 하나를 집계합니다.
    pub fn add_pair(&mut self, pair: &ExtractedPair) {
        self.add(&pair.category, &pair.subcategory);
    }

    /// 현재까지의 합계
    pub fn total(&self) -> u64 {
        self.total
    }

    /// 현재 상태의 복사본을 반환합니다.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            table: self.table.clone(),
            total: self.total,
        }
    }

    /// 집계기를 소비하여 최종 스냅샷을 반환합니다.
    pub fn finish(self) -> Snapshot {
        Snapshot {
            table: self.table,
            total: self.total,
        }
    }
}
