//! 정규식 기반 필드 추출기
//!
//! [`PatternExtractor`]는 라인 시작에 고정된 패턴 하나로 (엔드포인트, 레벨)을 추출합니다.
//!
//! # 캡처 그룹 규약
//! - 그룹 1: 레벨 (`INFO`, `ERROR` 등)
//! - 그룹 2: HTTP 메서드(GET/POST/PUT/DELETE/PATCH) 뒤의 경로
//! - 그룹 3: 메서드가 없을 때 콜론 뒤의 대체 경로
//!
//! 추출은 두 단계로 나뉩니다. 먼저 설정된 패턴을 매칭해 라인을 받아들이고 레벨을 얻습니다.
//! 그 다음 [`PatternExtractor::select_endpoint`]가 레벨 뒤 텍스트에서 메서드 경로를 먼저
//! 찾고, 없을 때만 패턴의 대체 경로 캡처를 씁니다. 메서드 앞에 콜론이 있어도 메서드 경로가 우선합니다.

use regex::{Captures, Regex};

use logtally_core::config::PATTERN_CAPTURE_GROUPS;
use logtally_core::pipeline::FieldExtractor;
use logtally_core::types::ExtractedPair;

use crate::error::LogPipelineError;

const LEVEL_GROUP: usize = 1;
const VERB_PATH_GROUP: usize = 2;
const FALLBACK_PATH_GROUP: usize = 3;

/// 메서드 경로 전략: 가장 먼저 나오는 `<METHOD> <path>`
pub const VERB_PATH_PATTERN: &str = r"(?:GET|POST|PUT|DELETE|PATCH)\s+(\S+)";

/// 엔드포인트가 어느 캡처 전략에서 나왔는지
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointSource {
    /// HTTP 메서드 뒤의 경로
    VerbPath,
    /// 콜론 뒤의 대체 경로 (그룹 3)
    Fallback,
}

/// 추출 상세 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// (엔드포인트, 레벨)
    pub pair: ExtractedPair,
    /// 엔드포인트 출처
    pub source: EndpointSource,
}

/// 정규식 기반 필드 추출기
///
/// 패턴은 생성 시 한 번만 컴파일합니다.
#[derive(Debug, Clone)]
pub struct PatternExtractor {
    name: String,
    regex: Regex,
    verb_path: Regex,
}

impl PatternExtractor {
    /// 패턴을 컴파일하여 추출기를 생성합니다.
    ///
    /// 패턴은 정확히 3개의 캡처 그룹을 가져야 합니다.
    pub fn new(name: impl Into<String>, pattern: &str) -> Result<Self, LogPipelineError> {
        let regex = Regex::new(pattern)?;
        let groups = regex.captures_len() - 1;
        if groups != PATTERN_CAPTURE_GROUPS {
            return Err(LogPipelineError::Pattern {
                reason: format!(
                    "expected {PATTERN_CAPTURE_GROUPS} capture groups, found {groups}"
                ),
            });
        }
        Ok(Self {
            name: name.into(),
            regex,
            verb_path: Regex::new(VERB_PATH_PATTERN)?,
        })
    }

    /// 컴파일된 패턴 문자열
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// 엔드포인트 출처까지 포함한 추출 결과를 반환합니다.
    pub fn extract_detailed(&self, line: &str) -> Option<Extraction> {
        // 1단계: 매칭 및 레벨
        let caps = self.regex.captures(line)?;
        // `^` 없이 설정된 패턴도 라인 시작에서만 인정
        if caps.get(0)?.start() != 0 {
            return None;
        }
        let level = caps.get(LEVEL_GROUP)?;

        // 2단계: 엔드포인트 선택
        let (endpoint, source) = self.select_endpoint(&caps, &line[level.end()..])?;
        Some(Extraction {
            pair: ExtractedPair::new(endpoint, level.as_str()),
            source,
        })
    }

    /// 엔드포인트를 고릅니다. 메서드 경로가 대체 경로보다 우선합니다.
    ///
    /// `tail`은 레벨 뒤의 나머지 라인입니다. 그 안에서 가장 먼저 나오는 메서드 경로를 찾고,
    /// 없으면 패턴의 그룹 2, 그룹 3 순서로 캡처를 씁니다. 모두 비어 있으면 `None`입니다.
    pub fn select_endpoint<'h>(
        &self,
        caps: &Captures<'h>,
        tail: &'h str,
    ) -> Option<(&'h str, EndpointSource)> {
        if let Some(path) = self.verb_path.captures(tail).and_then(|c| c.get(1)) {
            return Some((path.as_str(), EndpointSource::VerbPath));
        }
        if let Some(path) = caps.get(VERB_PATH_GROUP) {
            return Some((path.as_str(), EndpointSource::VerbPath));
        }
        caps.get(FALLBACK_PATH_GROUP)
            .map(|path| (path.as_str(), EndpointSource::Fallback))
    }
}

impl FieldExtractor for PatternExtractor {
    fn name(&self) -> &str {
        &self.name
    }

    fn extract(&self, line: &str) -> Option<ExtractedPair> {
        self.extract_detailed(line).map(|e| e.pair)
    }
}
