pub mod config;
pub mod error;
pub mod mcp;
pub mod server;
pub mod tools;

pub use config::BridgeConfig;
pub use error::{Result, ServoMcpError};
pub use server::ServoServer;
