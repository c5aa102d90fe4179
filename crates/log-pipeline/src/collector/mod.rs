//! 입력 소스 모듈 -- 로그 파일 검증과 라인 단위 읽기
//!
//! - [`validate_sources`]: 실행 전에 모든 입력 경로를 검증합니다.
//!   하나라도 없으면 어떤 집계도 시작하지 않습니다.
//! - [`FileSource`]: 파일을 라인 단위로 읽어 [`SourcePipeline`](crate::pipeline::SourcePipeline)에 공급합니다.

pub mod file;

pub use file::FileSource;

use std::path::{Path, PathBuf};

use crate::error::LogPipelineError;

/// 모든 입력 경로가 읽을 수 있는 파일인지 검증합니다.
///
/// 첫 번째로 발견한 문제를 반환합니다. 경로 순서는 유지됩니다.
pub fn validate_sources<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<PathBuf>, LogPipelineError> {
    let mut validated = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LogPipelineError::SourceNotFound(path.display().to_string()));
        }
        if path.is_dir() {
            return Err(LogPipelineError::Source {
                path: path.display().to_string(),
                reason: "is a directory".to_owned(),
            });
        }
        validated.push(path.to_path_buf());
    }
    Ok(validated)
}
