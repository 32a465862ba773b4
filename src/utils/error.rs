use thiserror::Error;

#[derive(Error, Debug)]
pub enum BasicsError {
    #[error("Please provide a name")]
    EmptyName,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl BasicsError {
    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            BasicsError::EmptyName => self.to_string(),
            BasicsError::IoError(e) => format!("Could not read or write a file: {}", e),
            BasicsError::ConfigError { message } => format!("Configuration problem: {}", message),
            BasicsError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BasicsError::EmptyName => "Pass a non-empty name with --checked-name",
            BasicsError::IoError(_) => "Check that the file exists and is readable",
            BasicsError::ConfigError { .. } => "Make sure the config file is valid TOML",
            BasicsError::InvalidConfigValueError { .. } => "Fix the value and run again",
        }
    }

    /// 依錯誤種類決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            BasicsError::EmptyName => 1,
            BasicsError::ConfigError { .. } | BasicsError::InvalidConfigValueError { .. } => 2,
            BasicsError::IoError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, BasicsError>;
