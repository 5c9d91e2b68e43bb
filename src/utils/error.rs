use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("No numbers could be read from '{path}'")]
    EmptyInput { path: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Input,
    Processing,
}

/// 嚴重程度，決定 CLI 的退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 本次操作中止，例如輸入檔沒有數字
    Medium,
    /// 設定或參數錯誤
    High,
    /// 檔案系統錯誤
    Critical,
}

impl ErrorSeverity {
    /// 2 保留給 clap 的參數錯誤
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 3,
            ErrorSeverity::Critical => 4,
        }
    }
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::IoError(_) => ErrorCategory::Io,
            EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => ErrorCategory::Configuration,
            EtlError::EmptyInput { .. } => ErrorCategory::Input,
            EtlError::ValidationError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 空輸入只是中止本次操作，使用者可以換個檔案重試
            EtlError::EmptyInput { .. } => ErrorSeverity::Medium,
            EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. }
            | EtlError::ValidationError { .. } => ErrorSeverity::High,
            EtlError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::IoError(e) => match e.kind() {
                std::io::ErrorKind::NotFound => {
                    "Check that the file or directory exists".to_string()
                }
                std::io::ErrorKind::PermissionDenied => {
                    "Check the file permissions".to_string()
                }
                _ => "Check the file path and available disk space".to_string(),
            },
            EtlError::ConfigValidationError { field, .. }
            | EtlError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
            EtlError::MissingConfigError { field } => {
                format!("Provide '{}' on the command line or in the job file", field)
            }
            EtlError::EmptyInput { .. } => {
                "The input file must contain whitespace-separated integers".to_string()
            }
            EtlError::ValidationError { .. } => {
                "Re-run with --verbose for more details".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::IoError(e) => format!("File operation failed: {}", e),
            EtlError::EmptyInput { .. } => {
                "Input file is empty or numbers could not be read.".to_string()
            }
            EtlError::MissingConfigError { field } => {
                format!("Missing required setting: {}", field)
            }
            other => other.to_string(),
        }
    }
}
