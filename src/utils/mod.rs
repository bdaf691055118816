pub mod config;
pub mod error;
pub mod lang;
pub mod script_detect;

pub use config::AppConfig;
pub use error::ConfigError;
