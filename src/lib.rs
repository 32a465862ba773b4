pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{HelloConfig, HelloSettings};
pub use core::args::EchoStyle;
pub use utils::error::{BasicsError, Result};
