pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::MenuShell;
pub use config::{cli::LocalStorage, toml_config::TomlConfig, JobConfig};
pub use core::{etl::EtlEngine, pipeline::NumberPipeline, NumberList, Operation};
pub use utils::error::{EtlError, Result};
