use std::io::Write;

use crate::config::HelloSettings;
use crate::core::{greetings, handle_error, quote};
use crate::utils::error::Result;

/// hello 程式的主流程。
///
/// 檢查過的問候失敗時立即回傳錯誤，之後的內容不會輸出。
pub fn run<W: Write>(settings: &HelloSettings, out: &mut W) -> Result<()> {
    writeln!(out, "{}", quote::hello())?;

    let message = greetings::hello(&settings.name);
    writeln!(out, "{}", message)?;

    tracing::debug!("checking name {:?}", settings.checked_name);
    let result = handle_error::hello(&settings.checked_name)?;

    writeln!(out, "{}", result)?;
    writeln!(out, "Hello, 世界")?;
    Ok(())
}
