//! E2E tests for `betternotes serve`

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpStream;
use std::process::{Child, Command, Stdio};
use std::time::Duration;

struct Server {
    child: Child,
    address: String,
}

impl Drop for Server {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

fn start_server() -> Server {
    let dir = tempfile::tempdir().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_betternotes"))
        .args(["--json", "serve", "--port", "0"])
        .current_dir(dir.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to start betternotes serve");

    let stdout = child.stdout.take().unwrap();
    let mut line = String::new();
    BufReader::new(stdout).read_line(&mut line).unwrap();
    let event: serde_json::Value = serde_json::from_str(line.trim())
        .unwrap_or_else(|e| panic!("bad startup line {line:?}: {e}"));
    assert_eq!(event["event"], "serving");

    Server {
        child,
        address: event["address"].as_str().unwrap().to_string(),
    }
}

/// Send one request and return `(status line, body)`.
fn request(address: &str, method: &str, path: &str, body: &str) -> (String, String) {
    let mut stream = TcpStream::connect(address).unwrap();
    stream.set_read_timeout(Some(Duration::from_secs(10))).unwrap();
    write!(
        stream,
        "{method} {path} HTTP/1.1\r\nHost: {address}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
    .unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).unwrap();
    let (head, body) = response.split_once("\r\n\r\n").unwrap_or((&response, ""));
    let status = head.lines().next().unwrap_or_default().to_string();
    (status, body.to_string())
}

#[test]
fn serve_converts_markdown() {
    let server = start_server();
    let payload = serde_json::json!({ "md_content": "# Served\n\n## Part\n$$a^2$$\n" });

    let (status, body) = request(&server.address, "POST", "/convert", &payload.to_string());

    assert!(status.contains("200"), "{status}");
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    let html = value["html_content"].as_str().unwrap();
    assert!(html.contains("<title>Served</title>"));
    assert!(html.contains(r#"<h1 id="L1"> Part</h1>"#), "{html}");
    assert!(html.contains(r"\[ a^2 \]"));
}

#[test]
fn serve_empty_request_is_untitled() {
    let server = start_server();

    let (status, body) = request(&server.address, "POST", "/convert", "{}");

    assert!(status.contains("200"), "{status}");
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(value["html_content"]
        .as_str()
        .unwrap()
        .contains("<title>Untitled</title>"));
}

#[test]
fn serve_unknown_path_is_404() {
    let server = start_server();

    let (status, _) = request(&server.address, "GET", "/missing", "");

    assert!(status.contains("404"), "{status}");
}
