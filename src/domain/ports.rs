use crate::domain::model::{Classification, Record};
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn pattern(&self) -> &str;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Record>>;
    fn transform(&self, records: Vec<Record>) -> Result<Classification>;
    fn load(&self, classification: Classification) -> Result<String>;
}
