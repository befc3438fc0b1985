use serde_json::{json, Value};
use servo_mcp::mcp::{dto::RpcRequest, handler};
use servo_mcp::{BridgeConfig, ServoServer};

fn test_server() -> ServoServer {
    let mut config = BridgeConfig::default();
    // Nothing listens here; protocol-level tests never reach the device.
    config.device.base_url = "http://127.0.0.1:9".to_string();
    config.device.command_timeout_secs = 1;
    config.device.action_timeout_secs = 1;
    ServoServer::new(config)
}

fn request(raw: &str) -> RpcRequest {
    serde_json::from_str(raw).expect("test request must parse")
}

#[tokio::test]
async fn initialize_advertises_the_same_tools_as_tools_list() {
    let server = test_server();
    let init = handler::handle_request(
        &server,
        request(r#"{"jsonrpc":"2.0","id":1,"method":"initialize"}"#),
    )
    .await
    .expect("initialize must respond");
    let list = handler::handle_request(
        &server,
        request(r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#),
    )
    .await
    .expect("tools/list must respond");

    let init_result = init.result_value().expect("initialize is a success");
    let list_result = list.result_value().expect("tools/list is a success");
    assert_eq!(
        init_result["capabilities"]["tools"]["tools"],
        list_result["tools"]
    );
    assert_eq!(init_result["protocolVersion"], json!("2024-11-05"));
    assert_eq!(init_result["serverInfo"]["name"], json!("servo-mcp"));
}

#[tokio::test]
async fn tools_list_describes_all_device_tools() {
    let server = test_server();
    let resp = handler::handle_request(
        &server,
        request(r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#),
    )
    .await
    .unwrap();
    let tools = resp.result_value().unwrap()["tools"].as_array().unwrap().clone();
    let names: Vec<_> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["control_servo", "set_servo", "hold"]);
    for tool in &tools {
        assert!(tool.get("inputSchema").is_some());
        assert!(tool["description"].as_str().unwrap().len() > 0);
    }
}

#[tokio::test]
async fn unknown_method_with_id_returns_method_not_found() {
    let server = test_server();
    let resp = handler::handle_request(
        &server,
        request(r#"{"jsonrpc":"2.0","id":1,"method":"foo"}"#),
    )
    .await
    .expect("a request with an id must be answered");
    assert_eq!(resp.id, json!(1));
    assert!(resp.result_value().is_none());
    let err = resp.error_value().expect("expected an error response");
    assert_eq!(err.code, -32601);
    assert!(err.message.contains("foo"));
}

#[tokio::test]
async fn unknown_method_notification_is_silently_dropped() {
    let server = test_server();
    let resp =
        handler::handle_request(&server, request(r#"{"jsonrpc":"2.0","method":"foo"}"#)).await;
    assert!(resp.is_none());
}

#[tokio::test]
async fn valid_method_notification_is_silently_dropped() {
    let server = test_server();
    let resp = handler::handle_request(
        &server,
        request(r#"{"jsonrpc":"2.0","method":"tools/list"}"#),
    )
    .await;
    assert!(resp.is_none());
}

#[tokio::test]
async fn null_id_is_echoed_as_null() {
    let server = test_server();
    let resp = handler::handle_request(
        &server,
        request(r#"{"jsonrpc":"2.0","id":null,"method":"tools/list"}"#),
    )
    .await
    .expect("null id is not a notification");
    assert_eq!(resp.id, Value::Null);
    assert!(resp.result_value().is_some());
}

#[tokio::test]
async fn string_id_is_echoed_with_its_type() {
    let server = test_server();
    let resp = handler::handle_request(
        &server,
        request(r#"{"jsonrpc":"2.0","id":"req-7","method":"tools/list"}"#),
    )
    .await
    .unwrap();
    assert_eq!(resp.id, json!("req-7"));
}

#[tokio::test]
async fn unknown_tool_gets_a_dedicated_error() {
    let server = test_server();
    let resp = handler::handle_request(
        &server,
        request(
            r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"warp_drive","arguments":{}}}"#,
        ),
    )
    .await
    .unwrap();
    let err = resp.error_value().expect("unknown tool must be an error");
    assert_eq!(err.code, -32602);
    assert!(err.message.contains("Unknown tool"));
    assert!(err.message.contains("warp_drive"));
}

#[tokio::test]
async fn malformed_arguments_are_invalid_params() {
    let server = test_server();
    let resp = handler::handle_request(
        &server,
        request(
            r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"control_servo","arguments":{"angle":"wide"}}}"#,
        ),
    )
    .await
    .unwrap();
    let err = resp.error_value().expect("expected an error response");
    assert_eq!(err.code, -32602);
    assert!(err.message.contains("control_servo"));
}

#[tokio::test]
async fn missing_params_is_invalid_params() {
    let server = test_server();
    let resp = handler::handle_request(
        &server,
        request(r#"{"jsonrpc":"2.0","id":1,"method":"tools/call"}"#),
    )
    .await
    .unwrap();
    let err = resp.error_value().expect("expected an error response");
    assert_eq!(err.code, -32602);
}
