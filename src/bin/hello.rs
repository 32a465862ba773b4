use clap::Parser;
use hello_basics::core::demo;
use hello_basics::utils::{logger, validation::Validate};
use hello_basics::{BasicsError, CliConfig, HelloConfig};

fn load_config(path: &str) -> hello_basics::Result<HelloConfig> {
    let config = HelloConfig::from_file(path)?;
    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if let Err(e) = cli.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let file_config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(e.exit_code());
            }
        },
        None => HelloConfig::default(),
    };

    let settings = file_config.merge_cli(&cli);

    // 設定檔也能開 verbose，所以等合併完才初始化日誌
    logger::init_cli_logger(settings.verbose);
    if let Some(path) = &cli.config {
        tracing::info!("📁 Loaded configuration from: {}", path);
    }
    tracing::debug!("settings: {:?}", settings);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = demo::run(&settings, &mut out);
    drop(out);

    match result {
        Ok(()) => Ok(()),
        Err(e @ BasicsError::EmptyName) => {
            // 致命錯誤：只輸出一行帶 prefix 的訊息後直接結束
            tracing::debug!("checked greeting failed: {:?}", e);
            eprintln!("{}", logger::fatal_line(&settings.log_prefix, &e));
            std::process::exit(e.exit_code());
        }
        Err(e) => {
            tracing::error!("❌ hello failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
