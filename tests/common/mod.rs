#![allow(dead_code)]

use emoji_gen_lib::pipeline::fetch::Fetcher;
use emoji_gen_lib::utils::logs::{PipelineLog, Stage};
use std::sync::Mutex;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;

/// 在本地端口上应答一次 HTTP 请求，返回可访问的 URL
pub async fn serve_once(status: &'static str, body: Vec<u8>) -> Url {
    serve_once_with_headers(status, "", body).await
}

/// 同上，`extra_headers` 每行以 `\r\n` 结尾
pub async fn serve_once_with_headers(
    status: &'static str,
    extra_headers: &'static str,
    body: Vec<u8>,
) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        // 读完请求头即可，GET 没有请求体
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
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
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\n{}Content-Length: {}\r\nConnection: close\r\n\r\n",
            status,
            extra_headers,
            body.len()
        );
        socket.write_all(header.as_bytes()).await.unwrap();
        socket.write_all(&body).await.unwrap();
        let _ = socket.shutdown().await;
    });

    Url::parse(&format!("http://{}/data/openmoji.json.gz", addr)).unwrap()
}

/// 返回一个没有监听者的本地地址
pub async fn closed_port_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{}/data/openmoji.json.gz", addr)).unwrap()
}

pub fn fetcher_for(url: Url) -> Fetcher {
    Fetcher::with_default_client(url).unwrap()
}

#[derive(Debug, Default)]
pub struct RecordingLog {
    pub entries: Mutex<Vec<(Stage, log::Level, String)>>,
}

impl RecordingLog {
    pub fn count_at(&self, level: log::Level) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, l, _)| *l == level)
            .count()
    }

    pub fn contains(&self, stage: Stage, level: log::Level, needle: &str) -> bool {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .any(|(s, l, m)| *s == stage && *l == level && m.contains(needle))
    }
}

impl PipelineLog for RecordingLog {
    fn log(&self, stage: Stage, level: log::Level, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((stage, level, message.to_string()));
    }
}
