//! 리포트 구성 -- 리포트 종류별 필터/추출기/렌더러 조립
//!
//! [`ReportSpec`]은 [`ReportKind`]와 core의 [`HandlersConfig`]로부터
//! 한 번의 실행에 필요한 구성 요소를 만듭니다. 필터와 추출기는 상태가 없으므로
//! `Arc`로 모든 워커가 공유합니다.
//!
//! # 사용 예시
//! ```ignore
//! use logtally_core::config::{LogtallyConfig, ReportKind};
//! use logtally_log_pipeline::config::ReportSpec;
//!
//! let config = LogtallyConfig::default();
//! let spec = ReportSpec::for_kind(ReportKind::Handlers, &config.handlers)?;
//! ```

use std::sync::Arc;

use logtally_core::config::{HandlersConfig, ReportKind};
use logtally_core::error::{ConfigError, LogtallyError};
use logtally_core::pipeline::{FieldExtractor, LineFilter};

use crate::error::LogPipelineError;
use crate::extractor::PatternExtractor;
use crate::filter::MarkerFilter;
use crate::report::ReportPrinter;

/// 한 리포트 실행에 필요한 구성 요소 묶음
#[derive(Clone)]
pub struct ReportSpec {
    /// 리포트 종류
    pub kind: ReportKind,
    /// 라인 필터
    pub filter: Arc<dyn LineFilter>,
    /// 필드 추출기
    pub extractor: Arc<dyn FieldExtractor>,
    /// 리포트 렌더러
    pub printer: ReportPrinter,
    /// 동시에 처리할 최대 소스 수 (0 = 소스 수만큼)
    pub max_workers: usize,
}

impl ReportSpec {
    /// 리포트 종류와 설정으로 구성 요소를 조립합니다.
    pub fn for_kind(kind: ReportKind, config: &HandlersConfig) -> Result<Self, LogPipelineError> {
        match kind {
            ReportKind::Handlers => Self::handlers(config),
        }
    }

    /// handlers 리포트 구성
    ///
    /// 설정 검증은 [`HandlersConfig::validate`]에 맡깁니다.
    pub fn handlers(config: &HandlersConfig) -> Result<Self, LogPipelineError> {
        config.validate().map_err(invalid_config)?;

        let extractor = PatternExtractor::new(ReportKind::Handlers.name(), &config.pattern)?;

        Ok(Self {
            kind: ReportKind::Handlers,
            filter: Arc::new(MarkerFilter::new(config.marker.clone())),
            extractor: Arc::new(extractor),
            printer: ReportPrinter::from_config(config),
            max_workers: config.max_workers,
        })
    }

    /// 소스 수에 대한 실제 워커 수 (최소 1)
    pub fn worker_limit(&self, sources: usize) -> usize {
        let limit = if self.max_workers == 0 {
            sources
        } else {
            self.max_workers.min(sources)
        };
        limit.max(1)
    }
}

fn invalid_config(err: LogtallyError) -> LogPipelineError {
    match err {
        LogtallyError::Config(ConfigError::InvalidValue { field, reason }) => {
            LogPipelineError::Config { field, reason }
        }
        other => LogPipelineError::Config {
            field: "handlers".to_owned(),
            reason: other.to_string(),
        },
    }
}

impl std::fmt::Debug for ReportSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportSpec")
            .field("kind", &self.kind)
            .field("extractor", &self.extractor.name())
            .field("printer", &self.printer)
            .field("max_workers", &self.max_workers)
            .finish()
    }
}
