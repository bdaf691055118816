use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file")]
    ReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration")]
    ParseError {
        #[from]
        source: serde_json::Error,
    },
}
