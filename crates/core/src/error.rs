//! 에러 타입 -- 도메인별 에러 정의
//!
//! 추출/집계/병합/렌더링 코어는 에러를 내지 않습니다.
//! 여기의 에러는 모두 실행 전 검증 단계(설정, 입력 소스, 리포트 종류)에서 발생합니다.

/// logtally 최상위 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum LogtallyError {
    /// 설정 관련 에러
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// 입력 소스 에러
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// 리포트 선택 에러
    #[error("report error: {0}")]
    Report(#[from] ReportError),

    /// 파이프라인 실행 에러
    #[error("pipeline error: {0}")]
    Pipeline(String),

    /// I/O 에러
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 설정 관련 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 설정 파일을 찾을 수 없음
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    /// 설정 파싱 실패
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    /// 유효하지 않은 설정 값
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// 입력 소스 에러
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// 파일이 존재하지 않음
    #[error("file not found: {path}")]
    NotFound { path: String },

    /// 파일 읽기 실패
    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: String, reason: String },
}

/// 리포트 선택 에러
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// 등록되지 않은 리포트 종류
    #[error("unknown report '{name}', choose from: {}", valid.join(", "))]
    UnknownKind { name: String, valid: Vec<String> },
}
