use crate::config::BridgeConfig;
use crate::error::{Result, ServoMcpError};
use crate::mcp::dto::{ContentItem, Tool, ToolCall, ToolResult};
use crate::tools::servo::{ControlServoInput, DeviceTools, HoldInput, SetServoInput};
use serde_json::json;

pub struct ServoServer {
    device: DeviceTools,
    tools: Vec<Tool>,
}

impl ServoServer {
    pub fn new(config: BridgeConfig) -> Self {
        let device = DeviceTools::new(&config.device);
        let tools = device_tool_descriptors();
        Self { device, tools }
    }

    /// The registry built at construction. Both `initialize` and
    /// `tools/list` advertise exactly this list.
    pub fn get_tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Executes one tool call. Device faults (unreachable controller,
    /// timeout, non-200 status) are contained here and come back as an
    /// `Ok` result whose content text describes the failure; only
    /// protocol-level problems (unknown tool, bad arguments) are `Err`.
    pub async fn handle_tool_call(&self, tool_call: ToolCall) -> Result<ToolResult> {
        tracing::info!("Handling tool call: {}", tool_call.name);

        let outcome = match tool_call.name.as_str() {
            "control_servo" => {
                let input: ControlServoInput = serde_json::from_value(tool_call.arguments)
                    .map_err(|e| {
                        ServoMcpError::invalid_arguments(format!("control_servo: {}", e))
                    })?;
                self.device.control_servo(input).await
            }
            "set_servo" => {
                let input: SetServoInput = serde_json::from_value(tool_call.arguments)
                    .map_err(|e| ServoMcpError::invalid_arguments(format!("set_servo: {}", e)))?;
                self.device.set_servo(input).await
            }
            "hold" => {
                let _input: HoldInput =
                    serde_json::from_value(tool_call.arguments).unwrap_or_default();
                self.device.hold().await
            }
            _ => {
                return Err(ServoMcpError::UnknownTool {
                    name: tool_call.name,
                })
            }
        };

        Ok(match outcome {
            Ok(text) => ToolResult {
                content: vec![ContentItem::text(text)],
                is_error: false,
            },
            Err(e) => {
                tracing::warn!("Device call failed: {}", e);
                let text = match &e {
                    ServoMcpError::DeviceStatus { status, body } => {
                        format!("Device rejected the command with HTTP {}: {}", status, body)
                    }
                    other => format!("Failed to reach the servo controller: {}", other),
                };
                ToolResult {
                    content: vec![ContentItem::text(text)],
                    is_error: true,
                }
            }
        })
    }
}

fn device_tool_descriptors() -> Vec<Tool> {
    vec![
        Tool {
            name: "control_servo".to_string(),
            description: "Moves the servo attached to the controller to the given angle."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "angle": {
                        "type": "integer",
                        "minimum": 0,
                        "maximum": 180,
                        "description": "Target angle in degrees (0-180)."
                    }
                },
                "required": ["angle"]
            }),
        },
        Tool {
            name: "set_servo".to_string(),
            description: "Sets one servo channel to a normalized position.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "servo": {
                        "type": "integer",
                        "minimum": 0,
                        "description": "Servo channel index."
                    },
                    "value": {
                        "type": "number",
                        "minimum": -1.0,
                        "maximum": 1.0,
                        "description": "Normalized position (-1.0 to 1.0)."
                    }
                },
                "required": ["servo", "value"]
            }),
        },
        Tool {
            name: "hold".to_string(),
            description: "Triggers the controller's hold action and waits for it to finish."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
    ]
}
