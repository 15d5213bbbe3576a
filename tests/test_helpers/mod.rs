// Test helpers shared by the integration tests
// Provides canned archive payloads and a throwaway local HTTP server

#![allow(dead_code)]

use exoscan::{Console, Outcome, PlanetRecord, Session, SessionOptions};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// The two-planet payload used throughout the examples
pub const KEPLER_PAIR: &str = r#"[{"pl_name":"Kepler-1b","disc_year":2010,"pl_rade":1.2},{"pl_name":"Kepler-2b","disc_year":2015,"pl_rade":12.0}]"#;

pub fn planet(name: &str, host: &str, year: i32, radius: f64, distance: f64) -> PlanetRecord {
    PlanetRecord {
        name: name.to_string(),
        host: host.to_string(),
        disc_year: year,
        mass: 0.0,
        radius,
        distance,
    }
}

/// Run a session over `records`, answering prompts from `input`.
/// Returns the outcome and everything written to the console.
pub fn run_session(
    records: Vec<PlanetRecord>,
    options: SessionOptions,
    input: &str,
) -> (Outcome, String) {
    let console = Console::new(input.as_bytes(), Vec::new());
    let mut session = Session::new(console, options);
    let outcome = session.run(records).expect("session should not fail");
    let output = String::from_utf8(session.into_console().into_output()).unwrap();
    (outcome, output)
}

/// Serve exactly one HTTP response from 127.0.0.1 on a random port
///
/// Returns the base URL and a handle resolving to the raw request text.
/// `declared_len` lets a test lie about Content-Length to cut the body short.
pub async fn serve_once(
    status_line: &'static str,
    body: Vec<u8>,
    declared_len: Option<usize>,
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

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
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        let header = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status_line,
            declared_len.unwrap_or(body.len())
        );
        socket.write_all(header.as_bytes()).await.unwrap();
        socket.write_all(&body).await.unwrap();
        let _ = socket.shutdown().await;

        String::from_utf8_lossy(&request).to_string()
    });

    (format!("http://{}", addr), handle)
}
