//! 마커 기반 라인 필터
//!
//! [`MarkerFilter`]는 설정된 마커 문자열의 포함 여부만 검사합니다.
//! 정규식 매칭보다 훨씬 저렴하므로 추출기 앞단에서 대부분의 라인을 걸러냅니다.

use logtally_core::pipeline::LineFilter;

/// 마커 부분 문자열 포함 여부로 라인을 고르는 필터
#[derive(Debug, Clone)]
pub struct MarkerFilter {
    marker: String,
}

impl MarkerFilter {
    /// 새 필터를 생성합니다.
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// 설정된 마커를 반환합니다.
    pub fn marker(&self) -> &str {
        &self.marker
    }
}

impl LineFilter for MarkerFilter {
    fn is_relevant(&self, line: &str) -> bool {
        line.contains(self.marker.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_line_with_marker() {
        let filter = MarkerFilter::new("django.request");
        assert!(filter.is_relevant("2023-01-01 12:00:00,000 INFO django.request: GET /api"));
    }

    #[test]
    fn rejects_line_without_marker() {
        let filter = MarkerFilter::new("django.request");
        assert!(!filter.is_relevant(
            "2023-01-01 12:00:00,000 INFO another.module: Some message"
        ));
    }

    #[test]
    fn marker_match_is_case_sensitive() {
        let filter = MarkerFilter::new("django.request");
        assert!(!filter.is_relevant("INFO DJANGO.REQUEST: GET /api"));
    }

    #[test]
    fn same_input_same_answer() {
        let filter = MarkerFilter::new("django.request");
        let line = "ERROR django.request: Internal Server Error: /x";
        assert_eq!(filter.is_relevant(line), filter.is_relevant(line));
    }

    #[test]
    fn empty_line_is_not_relevant() {
        assert!(!MarkerFilter::new("django.request").is_relevant(""));
    }
}
