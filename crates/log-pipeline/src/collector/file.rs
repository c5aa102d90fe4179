//! 파일 기반 로그 소스
//!
//! 로그 파일을 처음부터 끝까지 한 번 읽으며 각 라인을 파이프라인에 전달합니다.
//! UTF-8이 아닌 바이트는 대체 문자로 바꿔 읽고, 라인 끝의 `\n`/`\r\n`은 제거합니다.

use std::path::{Path, PathBuf};

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error::LogPipelineError;
use crate::pipeline::SourcePipeline;

/// 읽기 버퍼 크기 (바이트)
const READ_BUFFER_SIZE: usize = 64 * 1024;

/// 파일 하나를 라인 단위로 읽는 소스
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// 새 파일 소스를 생성합니다.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 파일 경로
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 파일의 모든 라인을 읽는 순서대로 파이프라인에 공급합니다.
    ///
    /// 읽기 중 에러가 나면 그때까지의 집계는 호출자가 버려야 합니다.
    pub async fn feed(&self, pipeline: &mut SourcePipeline) -> Result<(), LogPipelineError> {
        let file = tokio::fs::File::open(&self.path)
            .await
            .map_err(|e| self.source_error(e))?;
        let mut reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .await
                .map_err(|e| self.source_error(e))?;
            if read == 0 {
                break;
            }
            let line = String::from_utf8_lossy(trim_line_ending(&buf));
            pipeline.process_line(&line);
        }

        Ok(())
    }

    fn source_error(&self, err: std::io::Error) -> LogPipelineError {
        if err.kind() == std::io::ErrorKind::NotFound {
            LogPipelineError::SourceNotFound(self.path.display().to_string())
        } else {
            LogPipelineError::Source {
                path: self.path.display().to_string(),
                reason: err.to_string(),
            }
        }
    }
}

fn trim_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}
