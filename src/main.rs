use hello_basics::core::args;
use hello_basics::utils::logger;

fn main() -> anyhow::Result<()> {
    // 所有參數都要原樣印出，所以這裡不用 clap；verbose 只能透過 RUST_LOG 開
    logger::init_cli_logger(false);

    let argv: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    tracing::debug!("received {} argument(s)", argv.len().saturating_sub(1));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    args::write_all(&argv, &mut out)?;

    Ok(())
}
