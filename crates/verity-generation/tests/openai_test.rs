//! Exercises the chat backend against a one-shot local HTTP server.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use verity_core::config::GenerationConfig;
use verity_core::errors::GenerationError;
use verity_core::traits::{ILanguageModel, Prompt};
use verity_generation::OpenAiChatModel;

/// Serve one canned HTTP response and hand back the raw request.
async fn serve_once(status_line: &str, extra_headers: &str, body: &str) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n{extra_headers}\r\n{body}",
        body.len()
    );
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&request);
            if let Some(split) = text.find("\r\n\r\n") {
                let content_length = text[..split]
                    .lines()
                    .find_map(|l| {
                        let (name, value) = l.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if request.len() >= split + 4 + content_length {
                    break;
                }
            }
        }
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        String::from_utf8_lossy(&request).into_owned()
    });
    (format!("http://{addr}/v1/chat/completions"), handle)
}

fn model(endpoint: String) -> OpenAiChatModel {
    OpenAiChatModel::from_config(&GenerationConfig {
        endpoint,
        api_key: Some("sk-test".to_string()),
        ..Default::default()
    })
    .unwrap()
}

fn prompt() -> Prompt {
    Prompt {
        system: "rules".to_string(),
        user: "question".to_string(),
    }
}

#[test]
fn missing_api_key_is_not_configured() {
    let err = OpenAiChatModel::from_config(&GenerationConfig::default()).err().unwrap();
    assert!(matches!(err, GenerationError::NotConfigured { .. }));
}

#[tokio::test]
async fn successful_completion_returns_content() {
    let (endpoint, server) = serve_once(
        "200 OK",
        "",
        r#"{"choices":[{"message":{"role":"assistant","content":"Fasting is prescribed."}}]}"#,
    )
    .await;

    let text = model(endpoint).complete(&prompt()).await.unwrap();
    assert_eq!(text, "Fasting is prescribed.");

    let request = server.await.unwrap();
    assert!(request.contains("authorization: Bearer sk-test") || request.contains("Authorization: Bearer sk-test"));
    assert!(request.contains("\"model\":\"gpt-4o-mini\""));
    assert!(request.contains("\"max_tokens\":500"));
}

#[tokio::test]
async fn rate_limit_carries_retry_after() {
    let (endpoint, server) = serve_once(
        "429 Too Many Requests",
        "retry-after: 7\r\n",
        r#"{"error":"slow down"}"#,
    )
    .await;

    let err = model(endpoint).complete(&prompt()).await.unwrap_err();
    assert!(matches!(
        err,
        GenerationError::RateLimited {
            retry_after_secs: Some(7)
        }
    ));
    server.await.unwrap();
}

#[tokio::test]
async fn server_error_is_upstream() {
    let (endpoint, server) =
        serve_once("500 Internal Server Error", "", r#"{"error":"boom"}"#).await;

    let err = model(endpoint).complete(&prompt()).await.unwrap_err();
    match err {
        GenerationError::Upstream { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("boom"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn missing_content_is_empty_response() {
    let (endpoint, server) = serve_once("200 OK", "", r#"{"choices":[]}"#).await;
    let err = model(endpoint).complete(&prompt()).await.unwrap_err();
    assert!(matches!(err, GenerationError::EmptyResponse));
    server.await.unwrap();
}

#[tokio::test]
async fn unparseable_body_is_malformed() {
    let (endpoint, server) = serve_once("200 OK", "", "not json").await;
    let err = model(endpoint).complete(&prompt()).await.unwrap_err();
    assert!(matches!(err, GenerationError::MalformedResponse { .. }));
    server.await.unwrap();
}
