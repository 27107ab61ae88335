mod config;
mod error;

pub use config::{APP_NAME, AppConfig, AppConfigExt, DatasetFiles};
pub use error::ConfigError;
