//! Logtally 로그 파이프라인 -- 로그 파일을 읽어 빈도표 리포트를 만듭니다.
//!
//! # 모듈 구성
//!
//! - [`collector`]: 로그 소스 검증 및 파일 라인 읽기
//! - [`filter`]: 마커 부분 문자열 기반 라인 필터
//! - [`extractor`]: 정규식 기반 (level, endpoint) 추출기
//! - [`aggregator`]: 소스별 2단계 빈도표 집계
//! - [`merge`]: 소스별 스냅샷의 순수 병합
//! - [`report`]: 고정 컬럼 텍스트 리포트 렌더링
//! - [`pipeline`]: 소스별 워커 분산 실행과 병합 오케스트레이션
//! - [`config`]: 리포트 종류별 구성 요소 조립
//! - [`error`]: 도메인 에러 타입
//!
//! # 아키텍처
//!
//! ```text
//! FileSource -> MarkerFilter -> PatternExtractor -> Aggregator  (소스마다 하나)
//!                                                       |
//!                                          merge -> ReportPrinter
//! ```

pub mod aggregator;
pub mod config;
pub mod error;
pub mod extractor;
pub mod filter;
pub mod merge;
pub mod pipeline;
pub mod report;

pub mod collector;

// --- 주요 타입 re-export ---

// 파이프라인
pub use pipeline::{Orchestrator, RunSummary, SourceOutcome, SourcePipeline, SourceStats};

// 설정
pub use config::ReportSpec;

// 에러
pub use error::LogPipelineError;

// 단계별 구성 요소
pub use aggregator::Aggregator;
pub use extractor::{EndpointSource, Extraction, PatternExtractor};
pub use filter::MarkerFilter;
pub use merge::{merge, merge_snapshots};
pub use report::{ReportPrinter, ReportRow};

// 수집기
pub use collector::FileSource;
