use crate::error::UvaError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_MATRIX_SUBDIR: &str = "uva-matrix";
pub const DEFAULT_DECIMALS: u8 = 1;
pub const MAX_DECIMALS: u8 = 6;
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UvaConfig {
    pub data: Option<DataConfig>,
    pub report: Option<ReportConfig>,
    pub log: Option<LogConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub dir: Option<String>,
    pub matrix_subdir: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<ReportFormat>,
    pub decimals: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub data_dir: PathBuf,
    pub matrix_dir: PathBuf,
}

impl UvaConfig {
    pub fn data_paths_with(&self, dir_override: Option<&Path>) -> DataPaths {
        let data = self.data.as_ref();
        let data_dir = match dir_override {
            Some(dir) => dir.to_path_buf(),
            None => PathBuf::from(
                data.and_then(|data| data.dir.as_deref())
                    .unwrap_or(DEFAULT_DATA_DIR),
            ),
        };
        let matrix_subdir = data
            .and_then(|data| data.matrix_subdir.as_deref())
            .unwrap_or(DEFAULT_MATRIX_SUBDIR);
        DataPaths {
            matrix_dir: data_dir.join(matrix_subdir),
            data_dir,
        }
    }

    pub fn report_format(&self) -> ReportFormat {
        self.report
            .as_ref()
            .and_then(|report| report.format)
            .unwrap_or(ReportFormat::Json)
    }

    pub fn decimals(&self) -> u8 {
        self.report
            .as_ref()
            .and_then(|report| report.decimals)
            .unwrap_or(DEFAULT_DECIMALS)
    }

    pub fn log_level(&self) -> &str {
        self.log
            .as_ref()
            .and_then(|log| log.level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn validate(&self) -> Result<(), UvaError> {
        if let Some(data) = &self.data {
            for (key, value) in [("dir", &data.dir), ("matrix_subdir", &data.matrix_subdir)] {
                if value.as_deref().is_some_and(|value| value.trim().is_empty()) {
                    return Err(UvaError::ConfigParse(format!(
                        "data.{key} must not be empty"
                    )));
                }
            }
        }

        if self.decimals() > MAX_DECIMALS {
            return Err(UvaError::ConfigParse(format!(
                "report.decimals must be between 0 and {MAX_DECIMALS} (found {})",
                self.decimals()
            )));
        }

        if self.log_level().trim().is_empty() {
            return Err(UvaError::ConfigParse(
                "log.level must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
