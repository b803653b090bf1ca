//! HttpBackend against a minimal in-process HTTP/1.1 server.
//!
//! Each test binds a loopback listener, serves canned responses keyed by
//! method and path, and records request bodies for inspection.

use signverse_core::backend::{HttpBackend, TranslationBackend};
use signverse_core::config::BackendConfig;
use signverse_core::BackendError;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// (method, path) → (status, JSON body)
type Routes = Vec<(&'static str, &'static str, u16, &'static str)>;

struct TestServer {
    base_url: String,
    requests: Arc<Mutex<Vec<(String, String, String)>>>,
}

async fn serve(routes: Routes) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };

            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            let header_end = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break None;
                }
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    break Some(pos + 4);
                }
            };
            let Some(header_end) = header_end else {
                continue;
            };

            let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
            let content_length = head
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            while buf.len() < header_end + content_length {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            let body = String::from_utf8_lossy(&buf[header_end..]).to_string();

            let mut request_line = head.lines().next().unwrap_or_default().split(' ');
            let method = request_line.next().unwrap_or_default().to_string();
            let path = request_line.next().unwrap_or_default().to_string();
            recorded
                .lock()
                .unwrap()
                .push((method.clone(), path.clone(), body));

            let (status, payload) = routes
                .iter()
                .find(|(m, p, _, _)| *m == method && *p == path)
                .map(|(_, _, status, payload)| (*status, *payload))
                .unwrap_or((404, r#"{"error":"not found"}"#));

            let response = format!(
                "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                payload.len(),
                payload
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        }
    });

    TestServer {
        base_url: format!("http://{}", addr),
        requests,
    }
}

fn backend(server: &TestServer) -> HttpBackend {
    HttpBackend::new(&BackendConfig::with_base_url(&server.base_url)).unwrap()
}

#[tokio::test]
async fn test_fetch_detection_decodes_results() {
    let server = serve(vec![(
        "GET",
        "/vtot/results",
        200,
        r#"{"detected_signs":"hello","dominant_emotion":"happy"}"#,
    )])
    .await;

    let result = backend(&server).fetch_detection().await.unwrap();
    assert_eq!(result.detected_signs.as_deref(), Some("hello"));
    assert_eq!(result.dominant_emotion.as_deref(), Some("happy"));
}

#[tokio::test]
async fn test_fetch_detection_accepts_nulls() {
    let server = serve(vec![(
        "GET",
        "/vtot/results",
        200,
        r#"{"detected_signs":null,"dominant_emotion":null}"#,
    )])
    .await;

    let result = backend(&server).fetch_detection().await.unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
async fn test_start_detection_non_ok_is_status_error() {
    let server = serve(vec![("GET", "/vtot", 503, r#"{"error":"camera busy"}"#)]).await;

    let err = backend(&server).start_detection().await.unwrap_err();
    assert_eq!(
        err,
        BackendError::Status {
            endpoint: "/vtot".to_string(),
            status: 503,
            body: r#"{"error":"camera busy"}"#.to_string(),
        }
    );
}

#[tokio::test]
async fn test_speech_session_posts_actions_and_returns_text() {
    let server = serve(vec![("POST", "/stot", 200, r#"{"text":"good morning"}"#)]).await;
    let backend = backend(&server);

    backend.start_speech().await.unwrap();
    let text = backend.stop_speech().await.unwrap();
    assert_eq!(text, "good morning");

    let requests = server.requests.lock().unwrap();
    let bodies: Vec<_> = requests.iter().map(|(_, _, body)| body.as_str()).collect();
    assert_eq!(bodies, [r#"{"action":"start"}"#, r#"{"action":"stop"}"#]);
}

#[tokio::test]
async fn test_stop_without_text_is_decode_error() {
    let server = serve(vec![("POST", "/stot", 200, r#"{"message":"stopped"}"#)]).await;

    let err = backend(&server).stop_speech().await.unwrap_err();
    assert!(matches!(err, BackendError::Decode(_)));
}

#[tokio::test]
async fn test_malformed_results_is_decode_error() {
    let server = serve(vec![("GET", "/vtot/results", 200, "<html>oops</html>")]).await;

    let err = backend(&server).fetch_detection().await.unwrap_err();
    assert!(matches!(err, BackendError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Grab a free port, then close it so nothing is listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend =
        HttpBackend::new(&BackendConfig::with_base_url(format!("http://{}", addr))).unwrap();
    let err = backend.fetch_detection().await.unwrap_err();
    assert!(matches!(err, BackendError::Network(_)));
}
