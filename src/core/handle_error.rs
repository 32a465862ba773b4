use crate::core::greetings;
use crate::utils::error::{BasicsError, Result};

/// 跟 [`greetings::hello`] 一樣，但名字是空字串時回傳錯誤。
///
/// 只有空字串算錯誤，全空白的名字照樣接受。
pub fn hello(name: &str) -> Result<String> {
    if name.is_empty() {
        return Err(BasicsError::EmptyName);
    }
    Ok(greetings::hello(name))
}
