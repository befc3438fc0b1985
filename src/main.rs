use anyhow::Result;
use servo_mcp::mcp::{dto::RpcRequest, handler};
use servo_mcp::{BridgeConfig, ServoServer};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr only; stdout carries the protocol stream.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "servo_mcp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load .env for local dev (if present)
    if dotenvy::dotenv().is_ok() {
        tracing::info!("Loaded .env");
    }

    tracing::info!("Starting Servo MCP Server");

    let config = match std::env::var("SERVO_MCP_CONFIG") {
        Ok(path) => BridgeConfig::from_file(&path)?,
        Err(_) => BridgeConfig::from_env()?,
    };
    tracing::info!("Device endpoint: {}", config.device.base_url);

    let server = ServoServer::new(config);
    for tool in server.get_tools() {
        tracing::info!("  - {}: {}", tool.name, tool.description);
    }

    tracing::info!("Servo MCP Server running with stdio transport");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut reader = BufReader::new(stdin);
    let mut line = String::new();

    loop {
        line.clear();
        match reader.read_line(&mut line).await {
            Ok(0) => break, // EOF
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                tracing::debug!("Received: {}", line);

                let request = match serde_json::from_str::<RpcRequest>(line) {
                    Ok(request) => request,
                    Err(e) => {
                        // No id is recoverable from a malformed line, so no
                        // response can be addressed; skip it.
                        tracing::error!("Failed to parse request: {}", e);
                        continue;
                    }
                };

                let Some(response) = handler::handle_request(&server, request).await else {
                    continue;
                };

                let response_json = match serde_json::to_string(&response) {
                    Ok(json) => json,
                    Err(e) => {
                        tracing::error!("Failed to serialize response: {}", e);
                        continue;
                    }
                };

                tracing::debug!("Sending: {}", response_json);

                if let Err(e) = write_line(&mut stdout, &response_json).await {
                    tracing::error!("Failed to write response: {}", e);
                }
            }
            Err(e) => {
                tracing::error!("Error reading from stdin: {}", e);
                break;
            }
        }
    }

    tracing::info!("Servo MCP Server shutting down");
    Ok(())
}

async fn write_line(stdout: &mut io::Stdout, response_json: &str) -> std::io::Result<()> {
    stdout.write_all(response_json.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await
}
