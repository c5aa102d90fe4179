//! 파이프라인 trait -- 라인 단위 확장 포인트 정의
//!
//! 두 trait 모두 순수 함수여야 합니다. 같은 입력에는 항상 같은 결과를 반환하고
//! 내부 상태를 바꾸지 않으므로 여러 워커가 하나의 인스턴스를 공유해도 안전합니다.

use crate::types::ExtractedPair;

/// 원시 라인이 관심 도메인에 속하는지 판단하는 trait
///
/// 비싼 패턴 매칭 전에 호출되는 저렴한 사전 필터입니다.
pub trait LineFilter: Send + Sync {
    /// 라인이 관심 대상이면 true
    fn is_relevant(&self, line: &str) -> bool;
}

/// 라인에서 (category, subcategory) 쌍을 추출하는 trait
///
/// 매칭되지 않으면 `None`을 반환합니다. 에러가 아니며 해당 라인은 조용히 버려집니다.
pub trait FieldExtractor: Send + Sync {
    /// 추출기 이름 (로그/진단용)
    fn name(&self) -> &str;

    /// 라인에서 추출 결과를 얻습니다.
    fn extract(&self, line: &str) -> Option<ExtractedPair>;
}
