//! 고정 컬럼 텍스트 리포트
//!
//! [`ReportPrinter`]는 병합된 빈도표를 왼쪽 정렬 고정폭 표로 렌더링합니다.
//!
//! # 출력 형식
//! ```text
//! Total requests: 8
//! HANDLER     DEBUG       INFO        WARNING     ERROR       CRITICAL
//! ------------------------------------------------------------------------
//! /api        0           5           0           0           0
//! ```
//!
//! 컬럼 폭은 가장 긴 핸들러 길이 + `column_step`이며 헤더를 포함한 모든 컬럼에 동일하게
//! 적용됩니다. 설정된 레벨 목록에 없는 레벨은 집계는 되지만 컬럼으로 출력되지 않습니다.

use std::fmt::Write as _;

use serde::Serialize;

use logtally_core::config::HandlersConfig;
use logtally_core::types::{DEFAULT_LEVELS, FrequencyTable, Snapshot};

/// 첫 번째 컬럼 헤더
pub const HANDLER_HEADER: &str = "HANDLER";

/// 기본 컬럼 여백
pub const DEFAULT_COLUMN_STEP: usize = 5;

/// 리포트 한 행: 핸들러 하나를 레벨 컬럼 순서로 투영한 값
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// 핸들러 (category)
    pub handler: String,
    /// 레벨 컬럼 순서대로의 카운트 (없으면 0)
    pub counts: Vec<u64>,
}

/// 리포트 렌더러
#[derive(Debug, Clone)]
pub struct ReportPrinter {
    levels: Vec<String>,
    column_step: usize,
}

impl ReportPrinter {
    /// 레벨 컬럼과 컬럼 여백으로 렌더러를 생성합니다.
    pub fn new(levels: Vec<String>, column_step: usize) -> Self {
        Self {
            levels,
            column_step,
        }
    }

    /// handlers 설정에서 렌더러를 생성합니다.
    pub fn from_config(config: &HandlersConfig) -> Self {
        Self::new(config.levels.clone(), config.column_step)
    }

    /// 컬럼 레벨 목록
    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    /// 빈도표의 컬럼 폭
    pub fn column_width(&self, table: &FrequencyTable) -> usize {
        table.longest_category_len() + self.column_step
    }

    /// 빈도표를 행 목록으로 투영합니다. 행은 핸들러 이름순입니다.
    pub fn rows(&self, table: &FrequencyTable) -> Vec<ReportRow> {
        let mut rows: Vec<ReportRow> = table
            .iter()
            .map(|(handler, _)| ReportRow {
                handler: handler.to_owned(),
                counts: self
                    .levels
                    .iter()
                    .map(|level| table.count(handler, level))
                    .collect(),
            })
            .collect();
        rows.sort_by(|a, b| a.handler.cmp(&b.handler));
        rows
    }

    /// 리포트를 라인 목록으로 렌더링합니다 (개행 문자 없음).
    pub fn render_lines(&self, table: &FrequencyTable, total: u64) -> Vec<String> {
        let width = self.column_width(table);
        let columns = 1 + self.levels.len();

        let mut lines = Vec::with_capacity(3 + table.len());
        lines.push(format!("Total requests: {total}"));

        let header = std::iter::once(HANDLER_HEADER).chain(self.levels.iter().map(String::as_str));
        lines.push(join_cells(header, width));
        lines.push("-".repeat(width * columns));

        for row in self.rows(table) {
            let counts: Vec<String> = row.counts.iter().map(u64::to_string).collect();
            let cells =
                std::iter::once(row.handler.as_str()).chain(counts.iter().map(String::as_str));
            lines.push(join_cells(cells, width));
        }

        lines
    }

    /// 리포트를 문자열로 렌더링합니다. 각 라인은 `\n`으로 끝납니다.
    pub fn render(&self, table: &FrequencyTable, total: u64) -> String {
        let mut out = String::new();
        for line in self.render_lines(table, total) {
            // String에 대한 write!는 실패하지 않음
            let _ = writeln!(out, "{line}");
        }
        out
    }

    /// 스냅샷을 렌더링합니다.
    pub fn render_snapshot(&self, snapshot: &Snapshot) -> String {
        self.render(&snapshot.table, snapshot.total)
    }
}

impl Default for ReportPrinter {
    fn default() -> Self {
        Self::new(
            DEFAULT_LEVELS.iter().map(|l| (*l).to_owned()).collect(),
            DEFAULT_COLUMN_STEP,
        )
    }
}

fn join_cells<'a>(cells: impl Iterator<Item = &'a str>, width: usize) -> String {
    cells
        .map(|cell| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" ")
}
