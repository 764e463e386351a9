//! End-to-end test over a real socket, covering the peer address fallback.

use lookout_core::ServerConfig;
use lookout_report::{MemorySink, ReportServer};
use serde_json::json;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

async fn send_raw(addr: std::net::SocketAddr, request: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    String::from_utf8(response).unwrap()
}

#[tokio::test]
async fn test_report_over_tcp_uses_peer_address() {
    let sink = Arc::new(MemorySink::new());
    let server = ReportServer::new(ServerConfig::default(), sink.clone()).unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
        server
            .serve(listener, async {
                let _ = stop_rx.await;
            })
            .await
    });

    let body = r#"{"csp-report":{"blocked-uri":"https://evil.example"}}"#;
    let request = format!(
        "POST /api/csp-report HTTP/1.1\r\n\
         Host: {addr}\r\n\
         Content-Type: application/csp-report\r\n\
         User-Agent: TestAgent\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\r\n{body}",
        body.len()
    );
    let response = send_raw(addr, &request).await;
    assert!(response.starts_with("HTTP/1.1 204"), "{response}");

    let request =
        format!("GET /api/csp-report HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    let response = send_raw(addr, &request).await;
    assert!(response.starts_with("HTTP/1.1 405"), "{response}");
    assert!(response.ends_with(r#"{"error":"Method not allowed"}"#), "{response}");

    stop_tx.send(()).unwrap();
    handle.await.unwrap().unwrap();

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("ip"), Some(&json!("127.0.0.1")));
    assert_eq!(records[0].get("userAgent"), Some(&json!("TestAgent")));
    assert_eq!(
        records[0].get("csp-report"),
        Some(&json!({"blocked-uri": "https://evil.example"}))
    );
}
