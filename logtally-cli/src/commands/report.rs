//! `logtally report` command handler

use std::io::Write;

use serde::Serialize;
use tracing::info;

use logtally_core::config::{LogtallyConfig, ReportKind};
use logtally_core::types::FrequencyTable;
use logtally_log_pipeline::{Orchestrator, ReportRow, ReportSpec, RunSummary, SourceStats};

use crate::cli::ReportArgs;
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the `report` command.
///
/// Every file is validated before any of them is read. A missing file
/// fails the whole run with no partial report.
pub async fn execute(
    args: ReportArgs,
    config: &LogtallyConfig,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let spec = ReportSpec::for_kind(args.report, &config.handlers)?;
    let orchestrator = Orchestrator::new(spec);

    info!(report = %args.report, files = args.files.len(), "building report");
    let summary = orchestrator.run(&args.files).await?;

    let payload = ReportPayload::build(args.report, orchestrator.spec(), summary);
    writer.render(&payload)?;

    Ok(())
}

/// Report output.
///
/// JSON carries the merged table and per-file statistics; text carries
/// the fixed-column table only.
#[derive(Serialize)]
pub struct ReportPayload {
    /// Report name
    pub report: String,
    /// Total number of counted lines across all files
    pub total: u64,
    /// Column levels, in display order
    pub levels: Vec<String>,
    /// Merged handler -> level -> count table
    pub handlers: FrequencyTable,
    /// Rows projected onto the column levels, sorted by handler
    pub rows: Vec<ReportRow>,
    /// Per-file statistics, in argument order
    pub sources: Vec<SourceStats>,
    /// Rendered fixed-column table
    #[serde(skip)]
    pub table_text: String,
}

impl ReportPayload {
    /// Assemble the payload from a finished run.
    pub fn build(kind: ReportKind, spec: &ReportSpec, summary: RunSummary) -> Self {
        let printer = &spec.printer;
        Self {
            report: kind.name().to_owned(),
            total: summary.snapshot.total,
            levels: printer.levels().to_vec(),
            rows: printer.rows(&summary.snapshot.table),
            table_text: printer.render_snapshot(&summary.snapshot),
            handlers: summary.snapshot.table,
            sources: summary.sources,
        }
    }
}

impl Render for ReportPayload {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        write!(w, "{}", self.table_text)
    }
}
