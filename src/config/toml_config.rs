use crate::utils::error::{BasicsError, Result};
use crate::utils::logger::DEFAULT_PREFIX;
use crate::utils::validation::{self, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_NAME: &str = "Ashish";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelloConfig {
    pub greeting: GreetingConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    pub name: Option<String>,
    pub checked_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub prefix: Option<String>,
    pub verbose: Option<bool>,
}

/// 合併 CLI、設定檔與預設值之後，demo 實際使用的值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelloSettings {
    pub name: String,
    pub checked_name: String,
    pub log_prefix: String,
    pub verbose: bool,
}

impl Default for HelloSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            // 空字串會故意觸發錯誤
            checked_name: String::new(),
            log_prefix: DEFAULT_PREFIX.to_string(),
            verbose: false,
        }
    }
}

impl HelloConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BasicsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BasicsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${USER_NAME})，沒設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BasicsError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// 設定檔優先於預設值
    pub fn into_settings(self) -> HelloSettings {
        let defaults = HelloSettings::default();
        HelloSettings {
            name: self.greeting.name.unwrap_or(defaults.name),
            checked_name: self.greeting.checked_name.unwrap_or(defaults.checked_name),
            log_prefix: self.logging.prefix.unwrap_or(defaults.log_prefix),
            verbose: self.logging.verbose.unwrap_or(defaults.verbose),
        }
    }

    /// 命令列參數優先於設定檔
    #[cfg(feature = "cli")]
    pub fn merge_cli(self, cli: &crate::config::CliConfig) -> HelloSettings {
        let mut settings = self.into_settings();
        if let Some(name) = &cli.name {
            settings.name = name.clone();
        }
        if let Some(checked_name) = &cli.checked_name {
            settings.checked_name = checked_name.clone();
        }
        if let Some(prefix) = &cli.log_prefix {
            settings.log_prefix = prefix.clone();
        }
        settings.verbose |= cli.verbose;
        settings
    }
}

impl Validate for HelloConfig {
    fn validate(&self) -> Result<()> {
        if let Some(prefix) = &self.logging.prefix {
            validation::validate_no_control_chars("logging.prefix", prefix)?;
        }
        Ok(())
    }
}
