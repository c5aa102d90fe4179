//! 설정 관리 -- logtally.toml 파싱 및 런타임 설정
//!
//! [`LogtallyConfig`]는 모든 섹션의 설정을 담는 최상위 구조체입니다.
//!
//! # 설정 로딩 우선순위
//! 1. CLI 인자 (최고 우선)
//! 2. 환경변수 (`LOGTALLY_HANDLERS_MARKER=app.request` 형식)
//! 3. 설정 파일 (`logtally.toml`)
//! 4. 기본값 (`Default` 구현)
//!
//! # 사용 예시
//! ```no_run
//! # async fn example() -> Result<(), logtally_core::error::LogtallyError> {
//! use logtally_core::config::LogtallyConfig;
//!
//! // 파일에서 로드 + 환경변수 오버라이드
//! let config = LogtallyConfig::load("logtally.toml").await?;
//!
//! // TOML 문자열에서 직접 파싱
//! let config = LogtallyConfig::parse("[handlers]\ncolumn_step = 3")?;
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConfigError, LogtallyError, ReportError};
use crate::types::DEFAULT_LEVELS;

/// Django `django.request` 로거의 기본 마커
pub const DEFAULT_MARKER: &str = "django.request";

/// handlers 리포트의 기본 추출 패턴
///
/// 그룹 1 = 레벨, 그룹 2 = HTTP 메서드 뒤의 경로, 그룹 3 = 콜론 뒤의 대체 경로
pub const DEFAULT_HANDLER_PATTERN: &str = concat!(
    r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2},\d{3}\s+",
    r"(\w+)\s+django\.request:\s+",
    r"(?:.*?(?:GET|POST|PUT|DELETE|PATCH)\s+(\S+)|.*?:\s+(\S+))",
);

/// 추출 패턴이 가져야 하는 캡처 그룹 수
pub const PATTERN_CAPTURE_GROUPS: usize = 3;

/// logtally 통합 설정
///
/// `logtally.toml` 파일의 최상위 구조를 나타냅니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogtallyConfig {
    /// 일반 설정
    #[serde(default)]
    pub general: GeneralConfig,
    /// handlers 리포트 설정
    #[serde(default)]
    pub handlers: HandlersConfig,
}

impl LogtallyConfig {
    /// TOML 파일에서 설정을 로드하고 환경변수 오버라이드를 적용합니다.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, LogtallyError> {
        let mut config = Self::from_file(path).await?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// 경로가 주어지면 파일에서, 아니면 기본값에서 시작해 설정을 만듭니다.
    ///
    /// 어느 쪽이든 환경변수 오버라이드와 검증을 거칩니다.
    pub async fn load_or_default(path: Option<&Path>) -> Result<Self, LogtallyError> {
        match path {
            Some(path) => Self::load(path).await,
            None => {
                let mut config = Self::default();
                config.apply_env_overrides();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// TOML 파일에서 설정을 로드합니다 (환경변수 오버라이드 없음).
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, LogtallyError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LogtallyError::Config(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })
            } else {
                LogtallyError::Io(e)
            }
        })?;
        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// TOML 문자열에서 설정을 파싱합니다.
    pub fn parse(toml_str: &str) -> Result<Self, LogtallyError> {
        toml::from_str(toml_str).map_err(|e| {
            LogtallyError::Config(ConfigError::ParseFailed {
                reason: e.to_string(),
            })
        })
    }

    /// 환경변수로 설정값을 오버라이드합니다.
    ///
    /// 환경변수 네이밍 규칙: `LOGTALLY_{SECTION}_{FIELD}`
    pub fn apply_env_overrides(&mut self) {
        // General
        override_string(&mut self.general.log_level, "LOGTALLY_GENERAL_LOG_LEVEL");
        override_string(&mut self.general.log_format, "LOGTALLY_GENERAL_LOG_FORMAT");

        // Handlers
        override_string(&mut self.handlers.marker, "LOGTALLY_HANDLERS_MARKER");
        override_string(&mut self.handlers.pattern, "LOGTALLY_HANDLERS_PATTERN");
        override_csv(&mut self.handlers.levels, "LOGTALLY_HANDLERS_LEVELS");
        override_usize(
            &mut self.handlers.column_step,
            "LOGTALLY_HANDLERS_COLUMN_STEP",
        );
        override_usize(
            &mut self.handlers.max_workers,
            "LOGTALLY_HANDLERS_MAX_WORKERS",
        );
    }

    /// 설정값의 유효성을 검증합니다.
    pub fn validate(&self) -> Result<(), LogtallyError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.general.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_level".to_owned(),
                reason: format!("must be one of: {}", valid_levels.join(", ")),
            }
            .into());
        }

        let valid_formats = ["json", "pretty"];
        if !valid_formats.contains(&self.general.log_format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_format".to_owned(),
                reason: format!("must be one of: {}", valid_formats.join(", ")),
            }
            .into());
        }

        self.handlers.validate()
    }
}

/// 일반 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    pub log_level: String,
    /// 로그 형식 (json, pretty)
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_owned(),
            log_format: "pretty".to_owned(),
        }
    }
}

/// handlers 리포트 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlersConfig {
    /// 관심 라인을 고르는 마커 문자열
    pub marker: String,
    /// 3개 캡처 그룹을 가진 추출 정규식 (라인 시작에 고정)
    pub pattern: String,
    /// 리포트 컬럼으로 출력할 레벨 (출력 순서)
    pub levels: Vec<String>,
    /// 컬럼 폭 = 가장 긴 핸들러 길이 + column_step
    pub column_step: usize,
    /// 동시에 처리할 최대 소스 수 (0 = 소스 수만큼)
    pub max_workers: usize,
}

impl Default for HandlersConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_owned(),
            pattern: DEFAULT_HANDLER_PATTERN.to_owned(),
            levels: DEFAULT_LEVELS.iter().map(|l| (*l).to_owned()).collect(),
            column_step: 5,
            max_workers: 0,
        }
    }
}

impl HandlersConfig {
    /// handlers 섹션을 검증합니다.
    ///
    /// 패턴은 컴파일되어야 하고 정확히 3개의 캡처 그룹을 가져야 합니다.
    pub fn validate(&self) -> Result<(), LogtallyError> {
        if self.marker.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "handlers.marker".to_owned(),
                reason: "marker must not be empty".to_owned(),
            }
            .into());
        }

        let regex = Regex::new(&self.pattern).map_err(|e| ConfigError::InvalidValue {
            field: "handlers.pattern".to_owned(),
            reason: e.to_string(),
        })?;
        // captures_len()은 암묵적인 그룹 0을 포함
        let groups = regex.captures_len() - 1;
        if groups != PATTERN_CAPTURE_GROUPS {
            return Err(ConfigError::InvalidValue {
                field: "handlers.pattern".to_owned(),
                reason: format!(
                    "expected {PATTERN_CAPTURE_GROUPS} capture groups, found {groups}"
                ),
            }
            .into());
        }

        if self.levels.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "handlers.levels".to_owned(),
                reason: "at least one level column is required".to_owned(),
            }
            .into());
        }

        Ok(())
    }
}

/// 등록된 리포트 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// 핸들러별 레벨 빈도 리포트
    Handlers,
}

impl ReportKind {
    /// 리포트 이름
    pub fn name(self) -> &'static str {
        match self {
            Self::Handlers => "handlers",
        }
    }

    /// 등록된 모든 리포트 종류
    pub fn all() -> &'static [ReportKind] {
        &[Self::Handlers]
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ReportError::UnknownKind {
                name: s.to_owned(),
                valid: Self::all().iter().map(|k| k.name().to_owned()).collect(),
            })
    }
}

// --- 환경변수 오버라이드 헬퍼 ---

fn override_string(target: &mut String, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        *target = val;
    }
}

fn override_usize(target: &mut usize, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        match val.parse::<usize>() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!(
                env_key,
                value = val.as_str(),
                "failed to parse usize from env var, ignoring"
            ),
        }
    }
}

fn override_csv(target: &mut Vec<String>, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        *target = val
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect();
    }
}
