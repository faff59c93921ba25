pub mod config;
pub mod error;
pub mod icon_data;
pub mod writer;

pub use config::GeneratorConfig;
pub use error::{ConfigError, IconError};
pub use writer::{GenerationReport, IconWriter, generate};
