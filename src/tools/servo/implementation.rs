use super::dto::{ControlServoInput, SetServoInput};
use crate::config::DeviceConfig;
use crate::error::{Result, ServoMcpError};
use std::time::Duration;

/// HTTP adapter for the servo controller. Quick actuator commands and
/// long-running actions use separate clients so each gets its own timeout.
pub struct DeviceTools {
    command_http: reqwest::Client,
    action_http: reqwest::Client,
    base_url: String,
}

impl DeviceTools {
    pub fn new(config: &DeviceConfig) -> Self {
        let command_http = build_client(config.command_timeout_secs);
        let action_http = build_client(config.action_timeout_secs);
        Self {
            command_http,
            action_http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn control_servo(&self, input: ControlServoInput) -> Result<String> {
        let response = self
            .command_http
            .post(format!("{}/servo", self.base_url))
            .form(&[("angle", input.angle.to_string())])
            .send()
            .await?;
        self.success_or_status(
            response,
            format!("Servo moved to {} degrees", input.angle),
        )
        .await
    }

    pub async fn set_servo(&self, input: SetServoInput) -> Result<String> {
        let success = format!("Servo {} set to {}", input.servo, input.value);
        let response = self
            .command_http
            .post(format!("{}/servo", self.base_url))
            .json(&input)
            .send()
            .await?;
        self.success_or_status(response, success).await
    }

    pub async fn hold(&self) -> Result<String> {
        let response = self
            .action_http
            .get(format!("{}/hold", self.base_url))
            .send()
            .await?;
        self.success_or_status(response, "Hold action completed".to_string())
            .await
    }

    async fn success_or_status(
        &self,
        response: reqwest::Response,
        success_text: String,
    ) -> Result<String> {
        let status = response.status();
        if status.is_success() {
            Ok(success_text)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ServoMcpError::DeviceStatus {
                status: status.as_u16(),
                body,
            })
        }
    }
}

fn build_client(timeout_secs: u64) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(concat!("Servo-MCP/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            reqwest::Client::new()
        })
}
