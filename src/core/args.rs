//! 印出命令列參數的幾種等價寫法。
//!
//! 所有函式都接收完整的參數向量；第 0 個元素是程式路徑，一律略過。

use std::fmt;
use std::io::Write;

use crate::utils::error::Result;

/// Version 1: 用索引走訪
#[allow(clippy::needless_range_loop)]
pub fn echo_classic(argv: &[String]) -> String {
    let mut s = String::new();
    let mut sep = "";
    for i in 1..argv.len() {
        s.push_str(sep);
        s.push_str(&argv[i]);
        sep = " ";
    }
    s
}

/// Version 2: 用迭代器走訪
pub fn echo_range(argv: &[String]) -> String {
    let mut s = String::new();
    let mut sep = "";
    for arg in argv.iter().skip(1) {
        s.push_str(sep);
        s.push_str(arg);
        sep = " ";
    }
    s
}

/// Version 3: 直接 join
pub fn echo_join(argv: &[String]) -> String {
    tail(argv).join(" ")
}

/// 以 `[a b c]` 的格式印出整個 slice
pub fn echo_debug(argv: &[String]) -> String {
    format!("[{}]", tail(argv).join(" "))
}

fn tail(argv: &[String]) -> &[String] {
    argv.get(1..).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchoStyle {
    Classic,
    Range,
    Join,
    Debug,
}

impl EchoStyle {
    pub const ALL: [EchoStyle; 4] = [
        EchoStyle::Classic,
        EchoStyle::Range,
        EchoStyle::Join,
        EchoStyle::Debug,
    ];

    pub fn render(self, argv: &[String]) -> String {
        match self {
            EchoStyle::Classic => echo_classic(argv),
            EchoStyle::Range => echo_range(argv),
            EchoStyle::Join => echo_join(argv),
            EchoStyle::Debug => echo_debug(argv),
        }
    }
}

impl fmt::Display for EchoStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EchoStyle::Classic => "classic",
            EchoStyle::Range => "range",
            EchoStyle::Join => "join",
            EchoStyle::Debug => "debug",
        };
        f.write_str(name)
    }
}

/// 依序以四種方式各輸出一行
pub fn write_all<W: Write>(argv: &[String], out: &mut W) -> Result<()> {
    for style in EchoStyle::ALL {
        let line = style.render(argv);
        tracing::debug!("echo {} -> {:?}", style, line);
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_all_joiners_agree() {
        let cases = [
            argv(&["prog", "a", "b", "c"]),
            argv(&["prog"]),
            argv(&[]),
            argv(&["prog", ""]),
            argv(&["prog", "", ""]),
            argv(&["prog", "hello world", "x"]),
            argv(&["prog", "世界", "-v", "--flag=1"]),
        ];

        for case in &cases {
            let joined = echo_join(case);
            assert_eq!(echo_classic(case), joined, "classic differs for {:?}", case);
            assert_eq!(echo_range(case), joined, "range differs for {:?}", case);
        }
    }

    #[test]
    fn test_program_path_is_skipped() {
        let args = argv(&["prog", "a", "b", "c"]);
        assert_eq!(echo_classic(&args), "a b c");
        assert_eq!(echo_range(&args), "a b c");
        assert_eq!(echo_join(&args), "a b c");
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(echo_join(&argv(&["prog"])), "");
        assert_eq!(echo_classic(&argv(&[])), "");
        assert_eq!(echo_debug(&argv(&["prog"])), "[]");
        assert_eq!(echo_debug(&argv(&[])), "[]");
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(echo_debug(&argv(&["prog", "a", "b"])), "[a b]");
    }

    #[test]
    fn test_write_all_order() {
        let args = argv(&["prog", "a", "b", "c"]);
        let mut out = Vec::new();
        write_all(&args, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "a b c\na b c\na b c\n[a b c]\n");
    }

    #[test]
    fn test_style_names() {
        let names: Vec<String> = EchoStyle::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["classic", "range", "join", "debug"]);
    }
}
