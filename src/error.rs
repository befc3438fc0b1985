use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServoMcpError>;

#[derive(Error, Debug)]
pub enum ServoMcpError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Device returned HTTP {status}: {body}")]
    DeviceStatus { status: u16, body: String },
}

impl ServoMcpError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        ServoMcpError::ConfigError(msg.into())
    }

    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        ServoMcpError::InvalidArguments(msg.into())
    }
}
