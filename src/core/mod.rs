pub mod classify;
pub mod engine;
pub mod matcher;
pub mod pipeline;

pub use crate::domain::model::{Classification, Record};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
