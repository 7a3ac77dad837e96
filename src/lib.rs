pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::ClassifierEngine, pipeline::ClassifierPipeline};
pub use utils::error::{ClassifyError, Result};
