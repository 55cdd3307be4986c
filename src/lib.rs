pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{etl::CleanEngine, pipeline::CleanPipeline};
pub use domain::model::{CleanOutcome, CleanStats, Record};
pub use utils::error::{CleanError, Result};
