//! 파이프라인 오케스트레이션 -- 소스별 필터/추출/집계와 병합의 전체 흐름을 관리합니다.
//!
//! # 내부 아키텍처
//! ```text
//!            ┌ worker: FileSource -> LineFilter -> FieldExtractor -> Aggregator ┐
//! sources -> ┼ worker: ...                                                      ┼ -> merge -> Snapshot
//!            └ worker: ...                                                      ┘
//! ```
//!
//! 각 워커는 자기 [`Aggregator`]만 소유하므로 공유 가변 상태가 없습니다.
//! 병합은 모든 워커가 완료된 뒤 완전한 스냅샷만 대상으로 한 번 수행됩니다.
//! 워커 하나라도 실패하면 나머지를 중단하고 에러를 반환합니다 (부분 리포트 없음).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use logtally_core::metrics as m;
use logtally_core::pipeline::{FieldExtractor, LineFilter};
use logtally_core::types::Snapshot;

use crate::aggregator::Aggregator;
use crate::collector::{FileSource, validate_sources};
use crate::config::ReportSpec;
use crate::error::LogPipelineError;
use crate::merge::merge_snapshots;

/// 소스 하나의 처리 통계
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceStats {
    /// 소스 식별자 (파일 경로 등)
    pub source: String,
    /// 읽은 라인 수
    pub lines_read: u64,
    /// 필터를 통과한 라인 수
    pub lines_relevant: u64,
    /// 추출까지 성공한 라인 수
    pub lines_matched: u64,
}

impl SourceStats {
    /// 필터 또는 추출기에서 버려진 라인 수
    pub fn lines_dropped(&self) -> u64 {
        self.lines_read - self.lines_matched
    }
}

/// 소스 하나의 최종 결과
#[derive(Debug, Clone)]
pub struct SourceOutcome {
    /// 처리 통계
    pub stats: SourceStats,
    /// 불변 집계 결과
    pub snapshot: Snapshot,
}

/// 소스 하나를 처리하는 라인 파이프라인
///
/// 필터와 추출기는 공유하고, 집계 상태는 인스턴스가 단독으로 소유합니다.
pub struct SourcePipeline {
    filter: Arc<dyn LineFilter>,
    extractor: Arc<dyn FieldExtractor>,
    aggregator: Aggregator,
    stats: SourceStats,
}

impl SourcePipeline {
    /// 새 소스 파이프라인을 생성합니다.
    pub fn new(filter: Arc<dyn LineFilter>, extractor: Arc<dyn FieldExtractor>) -> Self {
        Self {
            filter,
            extractor,
            aggregator: Aggregator::new(),
            stats: SourceStats {
                source: "<memory>".to_owned(),
                ..SourceStats::default()
            },
        }
    }

    /// 리포트 구성으로 파이프라인을 생성합니다.
    pub fn from_spec(spec: &ReportSpec) -> Self {
        Self::new(Arc::clone(&spec.filter), Arc::clone(&spec.extractor))
    }

    /// 통계에 기록할 소스 식별자를 설정합니다.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.stats.source = source.into();
        self
    }

    /// 라인 하나를 처리합니다: 필터 -> 추출 -> 집계
    ///
    /// 필터나 추출에 실패한 라인은 조용히 버려집니다.
    pub fn process_line(&mut self, line: &str) {
        self.stats.lines_read += 1;

        if !self.filter.is_relevant(line) {
            return;
        }
        self.stats.lines_relevant += 1;

        if let Some(pair) = self.extractor.extract(line) {
            self.aggregator.add_pair(&pair);
            self.stats.lines_matched += 1;
        }
    }

    /// 여러 라인을 순서대로 처리합니다.
    pub fn process_lines<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) {
        for line in lines {
            self.process_line(line);
        }
    }

    /// 현재까지의 통계
    pub fn stats(&self) -> &SourceStats {
        &self.stats
    }

    /// 파이프라인을 소비하여 최종 결과를 반환합니다.
    pub fn finish(self) -> SourceOutcome {
        let report = self.extractor.name().to_owned();
        let dropped = self.stats.lines_dropped();
        metrics::counter!(m::LINES_READ_TOTAL, m::LABEL_REPORT => report.clone())
            .increment(self.stats.lines_read);
        metrics::counter!(m::LINES_MATCHED_TOTAL, m::LABEL_REPORT => report.clone())
            .increment(self.stats.lines_matched);
        metrics::counter!(m::LINES_DROPPED_TOTAL, m::LABEL_REPORT => report).increment(dropped);

        SourceOutcome {
            stats: self.stats,
            snapshot: self.aggregator.finish(),
        }
    }
}

/// 전체 실행 결과
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// 모든 소스를 병합한 스냅샷
    pub snapshot: Snapshot,
    /// 입력 순서대로의 소스별 통계
    pub sources: Vec<SourceStats>,
}

/// 소스별 워커를 분산 실행하고 결과를 병합하는 오케스트레이터
///
/// # 사용 예시
/// ```ignore
/// use logtally_log_pipeline::{Orchestrator, ReportSpec};
///
/// let spec = ReportSpec::handlers(&config.handlers)?;
/// let orchestrator = Orchestrator::new(spec);
/// let summary = orchestrator.run(&["a.log", "b.log"]).await?;
/// print!("{}", orchestrator.spec().printer.render_snapshot(&summary.snapshot));
/// ```
#[derive(Debug, Clone)]
pub struct Orchestrator {
    spec: Arc<ReportSpec>,
}

impl Orchestrator {
    /// 새 오케스트레이터를 생성합니다.
    pub fn new(spec: ReportSpec) -> Self {
        Self {
            spec: Arc::new(spec),
        }
    }

    /// 리포트 구성
    pub fn spec(&self) -> &ReportSpec {
        &self.spec
    }

    /// 모든 소스를 처리하고 병합된 결과를 반환합니다.
    ///
    /// 어떤 워커도 시작하기 전에 모든 경로를 검증합니다.
    pub async fn run<P: AsRef<Path>>(&self, paths: &[P]) -> Result<RunSummary, LogPipelineError> {
        let paths = validate_sources(paths)?;
        let workers = self.spec.worker_limit(paths.len());

        info!(
            report = %self.spec.kind,
            sources = paths.len(),
            workers,
            "starting report run"
        );

        let semaphore = Arc::new(Semaphore::new(workers));
        let mut tasks = JoinSet::new();

        for (index, path) in paths.into_iter().enumerate() {
            let spec = Arc::clone(&self.spec);
            let semaphore = Arc::clone(&semaphore);
            tasks.spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| LogPipelineError::Worker(e.to_string()))?;
                let outcome = process_file(&spec, path).await?;
                Ok::<_, LogPipelineError>((index, outcome))
            });
        }

        let mut outcomes = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            let result = match joined {
                Ok(result) => result,
                Err(e) => Err(LogPipelineError::Worker(e.to_string())),
            };
            match result {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    // 부분 결과는 병합하지 않음
                    warn!(error = %e, "source worker failed, aborting run");
                    metrics::counter!(
                        m::SOURCES_PROCESSED_TOTAL,
                        m::LABEL_REPORT => self.spec.kind.name(),
                        m::LABEL_RESULT => "failure"
                    )
                    .increment(1);
                    tasks.abort_all();
                    return Err(e);
                }
            }
        }

        outcomes.sort_by_key(|(index, _)| *index);
        let snapshot = merge_snapshots(outcomes.iter().map(|(_, o)| &o.snapshot));
        let sources: Vec<SourceStats> = outcomes.into_iter().map(|(_, o)| o.stats).collect();

        info!(
            report = %self.spec.kind,
            total = snapshot.total,
            handlers = snapshot.table.len(),
            "report run finished"
        );

        Ok(RunSummary { snapshot, sources })
    }
}

async fn process_file(spec: &ReportSpec, path: PathBuf) -> Result<SourceOutcome, LogPipelineError> {
    let source = FileSource::new(path);
    let mut pipeline = SourcePipeline::from_spec(spec).with_source(source.path().display().to_string());
    source.feed(&mut pipeline).await?;
    let outcome = pipeline.finish();

    metrics::counter!(
        m::SOURCES_PROCESSED_TOTAL,
        m::LABEL_REPORT => spec.kind.name(),
        m::LABEL_RESULT => "success"
    )
    .increment(1);
    debug!(
        source = %outcome.stats.source,
        lines_read = outcome.stats.lines_read,
        lines_relevant = outcome.stats.lines_relevant,
        lines_matched = outcome.stats.lines_matched,
        "source processed"
    );
    Ok(outcome)
}
