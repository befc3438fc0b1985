use crate::error::{Result, ServoMcpError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    pub server: ServerConfig,
    pub device: DeviceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Base URL of the servo controller, e.g. "http://192.168.183.68".
    pub base_url: String,
    /// Timeout for quick actuator commands.
    pub command_timeout_secs: u64,
    /// Timeout for longer-running physical actions.
    pub action_timeout_secs: u64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                log_level: "info".to_string(),
            },
            device: DeviceConfig {
                base_url: "http://192.168.183.68".to_string(),
                command_timeout_secs: 5,
                action_timeout_secs: 60,
            },
        }
    }
}

impl BridgeConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // Override with environment variables
        if let Ok(log_level) = std::env::var("SERVO_MCP_LOG_LEVEL") {
            config.server.log_level = log_level;
        }

        if let Ok(url) = std::env::var("SERVO_MCP_DEVICE_URL") {
            if !url.trim().is_empty() {
                config.device.base_url = url.trim_end_matches('/').to_string();
            }
        }

        if let Ok(secs) = std::env::var("SERVO_MCP_COMMAND_TIMEOUT_SECS") {
            config.device.command_timeout_secs = secs
                .parse()
                .map_err(|_| ServoMcpError::config_error("Invalid SERVO_MCP_COMMAND_TIMEOUT_SECS"))?;
        }

        if let Ok(secs) = std::env::var("SERVO_MCP_ACTION_TIMEOUT_SECS") {
            config.device.action_timeout_secs = secs
                .parse()
                .map_err(|_| ServoMcpError::config_error("Invalid SERVO_MCP_ACTION_TIMEOUT_SECS"))?;
        }

        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ServoMcpError::config_error(format!("Failed to read config file: {}", e)))?;

        let config: BridgeConfig = toml::from_str(&content)
            .map_err(|e| ServoMcpError::config_error(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }
}
