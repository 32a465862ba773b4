use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_PREFIX: &str = "app: ";

/// 只開本 crate（含 `hello` 執行檔）的日誌，不含依賴套件
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "hello_basics=debug,hello=debug"
    } else {
        "hello_basics=info,hello=info"
    }
}

pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    // stdout 只留給程式輸出
    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();

    // 已經有 subscriber 時（例如測試裡重複初始化）沿用原本的
    if let Err(e) = result {
        tracing::debug!("logger already initialised: {}", e);
    }
}

/// 致命錯誤前輸出的那一行，例如 `app: Please provide a name`
pub fn fatal_line(prefix: &str, err: &dyn std::fmt::Display) -> String {
    format!("{}{}", prefix, err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BasicsError;

    #[test]
    fn test_fatal_line_uses_prefix() {
        let line = fatal_line(DEFAULT_PREFIX, &BasicsError::EmptyName);
        assert_eq!(line, "app: Please provide a name");
    }

    #[test]
    fn test_fatal_line_without_prefix() {
        assert_eq!(fatal_line("", &"boom"), "boom");
    }

    #[test]
    fn test_default_directives_scoped_to_crate() {
        for verbose in [false, true] {
            let directives = default_directives(verbose);
            assert!(directives
                .split(',')
                .all(|d| d.starts_with("hello_basics=") || d.starts_with("hello=")));
        }
        assert!(default_directives(true).contains("=debug"));
        assert!(!default_directives(false).contains("debug"));
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_cli_logger(false);
        init_cli_logger(true);
    }
}
