pub mod error;
pub mod literal;
pub mod logger;
pub mod validation;
