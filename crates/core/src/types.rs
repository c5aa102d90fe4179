//! 도메인 타입 -- 시스템 전역에서 사용되는 공통 타입
//!
//! 추출 결과([`ExtractedPair`]), 2단계 빈도표([`FrequencyTable`]),
//! 소스별 불변 결과([`Snapshot`])를 정의합니다.
//! 파이프라인, 병합기, 리포터는 모두 이 타입들로 데이터를 주고받습니다.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// 리포트 컬럼으로 사용하는 기본 레벨 목록 (낮은 심각도 -> 높은 심각도)
pub const DEFAULT_LEVELS: [&str; 5] = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"];

/// 한 로그 라인에서 추출한 (category, subcategory) 쌍
///
/// handlers 리포트에서는 (엔드포인트 경로, 로그 레벨)입니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtractedPair {
    /// 1차 그룹 키 (엔드포인트 경로)
    pub category: String,
    /// 카테고리별로 세는 2차 키 (로그 레벨)
    pub subcategory: String,
}

impl ExtractedPair {
    /// 새 추출 결과를 생성합니다.
    pub fn new(category: impl Into<String>, subcategory: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            subcategory: subcategory.into(),
        }
    }
}

impl fmt::Display for ExtractedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.category, self.subcategory)
    }
}

/// 2단계 빈도표: category -> (subcategory -> count)
///
/// 삽입 순서는 의미가 없으며, 비교는 매핑 단위로 이루어집니다.
/// 없는 키는 읽을 때 0으로 취급하고, 쓰기(`increment`)에서만 슬롯을 만듭니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: HashMap<String, HashMap<String, u64>>,
}

impl FrequencyTable {
    /// 빈 빈도표를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// (category, subcategory) 슬롯에 `by`만큼 더합니다.
    ///
    /// 중간 매핑이 없으면 처음 사용할 때 만듭니다.
    pub fn increment(&mut self, category: &str, subcategory: &str, by: u64) {
        *self
            .counts
            .entry(category.to_owned())
            .or_default()
            .entry(subcategory.to_owned())
            .or_default() += by;
    }

    /// 슬롯 값을 반환합니다. 없으면 0이며 표를 변경하지 않습니다.
    pub fn count(&self, category: &str, subcategory: &str) -> u64 {
        self.counts
            .get(category)
            .and_then(|levels| levels.get(subcategory))
            .copied()
            .unwrap_or(0)
    }

    /// 카테고리 키 목록을 반환합니다 (순서 보장 없음).
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// 카테고리 하나의 subcategory 매핑을 반환합니다.
    pub fn levels(&self, category: &str) -> Option<&HashMap<String, u64>> {
        self.counts.get(category)
    }

    /// (category, subcategory 매핑) 쌍을 순회합니다.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HashMap<String, u64>)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// 가장 긴 카테고리 키의 길이 (문자 수). 빈 표는 0입니다.
    pub fn longest_category_len(&self) -> usize {
        self.counts
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// 모든 슬롯 값의 합
    pub fn sum(&self) -> u64 {
        self.counts.values().flat_map(|levels| levels.values()).sum()
    }

    /// 카테고리 수
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// 카테고리가 하나도 없는지 여부
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<C, S> FromIterator<(C, S, u64)> for FrequencyTable
where
    C: AsRef<str>,
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (C, S, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (category, subcategory, count) in iter {
            table.increment(category.as_ref(), subcategory.as_ref(), count);
        }
        table
    }
}

/// 소스 하나(또는 병합 결과)의 불변 집계 결과
///
/// 불변식: `table.sum() == total`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// 빈도표
    pub table: FrequencyTable,
    /// 집계된 추출 결과 수
    pub total: u64,
}

impl Snapshot {
    /// 빈 스냅샷 (병합의 항등원)
    pub fn empty() -> Self {
        Self::default()
    }

    /// 빈도표에서 스냅샷을 만듭니다. total은 표의 합으로 설정됩니다.
    pub fn from_table(table: FrequencyTable) -> Self {
        let total = table.sum();
        Self { table, total }
    }
}
