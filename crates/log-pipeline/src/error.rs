//! 로그 파이프라인 에러 타입
//!
//! [`LogPipelineError`]는 파이프라인 구성과 소스 처리 중 발생하는 에러를 표현합니다.
//! 라인 단위 처리(필터/추출/집계)는 에러를 내지 않으며, 매칭되지 않는 라인은 조용히 버려집니다.
//! `From<LogPipelineError> for LogtallyError` 변환이 구현되어 있어
//! 상위 레이어에서 `?` 연산자로 자연스럽게 전파할 수 있습니다.

use logtally_core::error::{ConfigError, LogtallyError, SourceError};

/// 로그 파이프라인 도메인 에러
#[derive(Debug, thiserror::Error)]
pub enum LogPipelineError {
    /// 추출 패턴이 요구 조건을 만족하지 않음
    #[error("pattern error: {reason}")]
    Pattern {
        /// 실패 사유
        reason: String,
    },

    /// 입력 소스 에러 (파일 없음, 읽기 실패)
    #[error("source error: {path}: {reason}")]
    Source {
        /// 소스 경로
        path: String,
        /// 에러 사유
        reason: String,
    },

    /// 존재하지 않는 입력 소스
    #[error("file not found: {0}")]
    SourceNotFound(String),

    /// 워커 태스크 실패 (패닉, 취소)
    #[error("worker error: {0}")]
    Worker(String),

    /// 설정 에러
    #[error("config error: {field}: {reason}")]
    Config {
        /// 설정 필드명
        field: String,
        /// 에러 사유
        reason: String,
    },

    /// I/O 에러
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// 정규식 컴파일 에러
    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl From<LogPipelineError> for LogtallyError {
    fn from(err: LogPipelineError) -> Self {
        match err {
            LogPipelineError::SourceNotFound(path) => {
                LogtallyError::Source(SourceError::NotFound { path })
            }
            LogPipelineError::Source { path, reason } => {
                LogtallyError::Source(SourceError::ReadFailed { path, reason })
            }
            LogPipelineError::Config { field, reason } => {
                LogtallyError::Config(ConfigError::InvalidValue { field, reason })
            }
            LogPipelineError::Pattern { reason } => {
                LogtallyError::Config(ConfigError::InvalidValue {
                    field: "handlers.pattern".to_owned(),
                    reason,
                })
            }
            LogPipelineError::Regex(e) => LogtallyError::Config(ConfigError::InvalidValue {
                field: "handlers.pattern".to_owned(),
                reason: e.to_string(),
            }),
            LogPipelineError::Io(e) => LogtallyError::Io(e),
            LogPipelineError::Worker(reason) => LogtallyError::Pipeline(reason),
        }
    }
}
