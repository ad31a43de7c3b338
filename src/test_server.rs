//! Loopback HTTP/1.1 server for end-to-end transport tests.
//!
//! Every connection gets one response and is closed. The response body is
//! the lowercased request head followed by the raw request body, so tests
//! can assert on what actually went over the wire. A request path of
//! `/status/<code>` answers with that status instead of `200`.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use url::Url;

/// Starts the server on an ephemeral port and returns its base URL.
pub async fn spawn_echo_server() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(handle(stream));
        }
    });

    Url::parse(&format!("http://{addr}/")).unwrap()
}

/// A reqwest client that never routes loopback traffic through a proxy.
pub fn direct_client() -> reqwest::ClientBuilder {
    reqwest::Client::builder().no_proxy()
}

async fn handle(mut stream: TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let head_end = loop {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).to_lowercase();
    let content_length = head
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < head_end + content_length {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }

    let status = requested_status(&head);
    let mut payload = head.into_bytes();
    payload.extend_from_slice(&buf[head_end..head_end + content_length]);

    let response_head = format!(
        "HTTP/1.1 {status} Echo\r\ncontent-length: {}\r\ncontent-type: text/plain\r\nconnection: close\r\n\r\n",
        payload.len()
    );

    let _ = stream.write_all(response_head.as_bytes()).await;
    let _ = stream.write_all(&payload).await;
    let _ = stream.shutdown().await;
}

/// `200` unless the request line targets `/status/<code>`.
fn requested_status(head: &str) -> u16 {
    head.lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|path| path.strip_prefix("/status/"))
        .and_then(|code| code.parse().ok())
        .unwrap_or(200)
}
