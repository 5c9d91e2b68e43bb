pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, Operation};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};

#[cfg(feature = "cli")]
use crate::utils::error::EtlError;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

/// 單次執行所需的完整設定：操作、輸入檔、輸出檔
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobConfig {
    pub operation: Operation,
    pub input_path: String,
    pub output_path: String,
}

impl JobConfig {
    pub fn new(
        operation: Operation,
        input_path: impl Into<String>,
        output_path: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }
}

impl ConfigProvider for JobConfig {
    fn operation(&self) -> Operation {
        self.operation
    }

    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for JobConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input_path)?;
        validate_path("output", &self.output_path)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "numfile-etl")]
#[command(version)]
#[command(about = "Sort, reverse or pair-swap up to 100 integers read from a text file")]
#[command(long_about = "Without job arguments an interactive menu is started on stdin.")]
pub struct CliConfig {
    /// Operation: sort, reverse or swap (also 1, 2, 3)
    #[arg(short, long)]
    pub operation: Option<Operation>,

    /// Input file with whitespace-separated integers
    #[arg(short, long)]
    pub input: Option<String>,

    /// Output file, overwritten if it exists
    #[arg(short = 'O', long)]
    pub output: Option<String>,

    /// Path to a TOML job file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Base directory for relative file paths
    #[arg(long)]
    pub work_dir: Option<String>,

    /// Show the job summary without reading or writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log process CPU and memory usage per phase
    #[arg(long)]
    pub monitor: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 沒有任何作業相關參數時進入互動選單
    pub fn is_interactive(&self) -> bool {
        self.operation.is_none()
            && self.config.is_none()
            && self.input.is_none()
            && self.output.is_none()
    }

    /// 互動選單一定會讀寫檔案，不能搭配 --dry-run
    pub fn check_interactive(&self) -> Result<()> {
        if self.dry_run {
            return Err(EtlError::ConfigValidationError {
                field: "dry_run".to_string(),
                message: "--dry-run needs --operation or --config".to_string(),
            });
        }
        Ok(())
    }

    /// 合併命令列與設定檔，命令列優先
    pub fn resolve_job(&self, file: Option<&TomlConfig>) -> Result<JobConfig> {
        let operation = self
            .operation
            .or_else(|| file.map(|f| f.transform.operation))
            .ok_or_else(|| EtlError::MissingConfigError {
                field: "operation".to_string(),
            })?;

        let input_path = self
            .input
            .clone()
            .or_else(|| file.map(|f| f.source.path.clone()))
            .ok_or_else(|| EtlError::MissingConfigError {
                field: "input".to_string(),
            })?;

        let output_path = self
            .output
            .clone()
            .or_else(|| file.map(|f| f.load.path.clone()))
            .ok_or_else(|| EtlError::MissingConfigError {
                field: "output".to_string(),
            })?;

        let job = JobConfig {
            operation,
            input_path,
            output_path,
        };
        job.validate()?;
        Ok(job)
    }

    pub fn base_dir(&self, file: Option<&TomlConfig>) -> String {
        self.work_dir
            .clone()
            .or_else(|| file.and_then(|f| f.base_dir().map(str::to_string)))
            .unwrap_or_default()
    }

    pub fn monitoring_enabled(&self, file: Option<&TomlConfig>) -> bool {
        self.monitor || file.map(|f| f.monitoring_enabled()).unwrap_or(false)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    fn file_config() -> TomlConfig {
        TomlConfig::from_toml_str(
            r#"
[job]
name = "nightly"

[source]
path = "in.txt"

[transform]
operation = "reverse"

[load]
path = "out.txt"

[storage]
base_dir = "/data"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_one_shot_arguments() {
        let cli = CliConfig::try_parse_from([
            "numfile-etl",
            "--operation",
            "swap",
            "--input",
            "a.txt",
            "--output",
            "b.txt",
        ])
        .unwrap();

        assert!(!cli.is_interactive());
        let job = cli.resolve_job(None).unwrap();
        assert_eq!(job, JobConfig::new(Operation::SwapPairs, "a.txt", "b.txt"));
    }

    #[test]
    fn test_no_arguments_is_interactive() {
        let cli = CliConfig::try_parse_from(["numfile-etl"]).unwrap();
        assert!(cli.is_interactive());
    }

    #[test]
    fn test_paths_alone_are_not_interactive() {
        let cli = CliConfig::try_parse_from(["numfile-etl", "-i", "in.txt", "-O", "out.txt"])
            .unwrap();

        assert!(!cli.is_interactive());
        match cli.resolve_job(None) {
            Err(EtlError::MissingConfigError { field }) => assert_eq!(field, "operation"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_dry_run_rejected_for_menu() {
        let cli = CliConfig::try_parse_from(["numfile-etl", "--dry-run"]).unwrap();

        assert!(cli.is_interactive());
        assert!(matches!(
            cli.check_interactive(),
            Err(EtlError::ConfigValidationError { .. })
        ));
        assert!(CliConfig::default().check_interactive().is_ok());
    }

    #[test]
    fn test_invalid_operation_is_rejected() {
        assert!(CliConfig::try_parse_from(["numfile-etl", "-o", "shuffle"]).is_err());
    }

    #[test]
    fn test_missing_output_is_reported() {
        let cli = CliConfig {
            operation: Some(Operation::Sort),
            input: Some("a.txt".to_string()),
            ..Default::default()
        };
        match cli.resolve_job(None) {
            Err(EtlError::MissingConfigError { field }) => assert_eq!(field, "output"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_command_line_overrides_file() {
        let file = file_config();
        let cli = CliConfig {
            operation: Some(Operation::Sort),
            output: Some("other.txt".to_string()),
            ..Default::default()
        };

        let job = cli.resolve_job(Some(&file)).unwrap();
        assert_eq!(job, JobConfig::new(Operation::Sort, "in.txt", "other.txt"));
        assert_eq!(cli.base_dir(Some(&file)), "/data");
    }

    #[test]
    fn test_work_dir_overrides_file_base_dir() {
        let file = file_config();
        let cli = CliConfig {
            work_dir: Some("/tmp/work".to_string()),
            ..Default::default()
        };
        assert_eq!(cli.base_dir(Some(&file)), "/tmp/work");
        assert_eq!(CliConfig::default().base_dir(None), "");
    }
}
