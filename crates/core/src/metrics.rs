//! 메트릭 이름 및 레이블 상수
//!
//! 모든 메트릭의 이름을 중앙에서 정의합니다.
//! 파이프라인은 이 상수로 `metrics::counter!()` 매크로를 호출합니다.
//! 레코더가 설치되지 않으면 카운터는 아무 일도 하지 않습니다.
//!
//! # 네이밍 컨벤션
//!
//! - 접두어: `logtally_`
//! - 접미어: `_total` (counter)

// ─── 레이블 키 상수 ────────────────────────────────────────────────

/// 리포트 종류 레이블 키 (handlers)
pub const LABEL_REPORT: &str = "report";

/// 결과 레이블 키 (success, failure)
pub const LABEL_RESULT: &str = "result";

// ─── 파이프라인 메트릭 ──────────────────────────────────────────────

/// 읽은 전체 라인 수 (counter)
pub const LINES_READ_TOTAL: &str = "logtally_lines_read_total";

/// 필터와 추출기를 모두 통과한 라인 수 (counter)
pub const LINES_MATCHED_TOTAL: &str = "logtally_lines_matched_total";

/// 필터 또는 추출기에서 버려진 라인 수 (counter)
pub const LINES_DROPPED_TOTAL: &str = "logtally_lines_dropped_total";

/// 처리 완료된 소스 수 (counter, label: result)
pub const SOURCES_PROCESSED_TOTAL: &str = "logtally_sources_processed_total";

/// 메트릭 이름 목록
pub const ALL_METRICS: &[&str] = &[
    LINES_READ_TOTAL,
    LINES_MATCHED_TOTAL,
    LINES_DROPPED_TOTAL,
    SOURCES_PROCESSED_TOTAL,
];
