//! logtally 공통 크레이트
//!
//! 라인 필터/추출기 trait, 빈도표와 스냅샷 타입, 설정, 에러, 메트릭 이름을 정의합니다.
//! 파이프라인 크레이트와 CLI는 이 크레이트의 타입으로만 데이터를 주고받습니다.

pub mod config;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod types;

// --- 주요 타입 re-export ---
// 각 모듈의 핵심 타입을 크레이트 루트에서 바로 사용할 수 있도록 합니다.

// 에러
pub use error::{ConfigError, LogtallyError, ReportError, SourceError};

// 설정
pub use config::{GeneralConfig, HandlersConfig, LogtallyConfig, ReportKind};

// 파이프라인 trait
pub use pipeline::{FieldExtractor, LineFilter};

// 도메인 타입
pub use types::{DEFAULT_LEVELS, ExtractedPair, FrequencyTable, Snapshot};
