//! Shared test helpers

#![allow(dead_code)]

use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use api_schema_probe::fetch::{FetchRequest, HttpTransport, RawResponse, TransportError};
use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Transport replaying a fixed sequence of attempt outcomes
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    calls: AtomicU32,
}

impl ScriptedTransport {
    pub fn new(script: Vec<Result<RawResponse, TransportError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn get(
        &self,
        _request: &FetchRequest,
        _timeout: Duration,
    ) -> Result<RawResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Connection("script exhausted".to_string())))
    }
}

/// Transport that never answers before its attempt timeout
pub struct HangingTransport {
    pub calls: AtomicU32,
}

#[async_trait]
impl HttpTransport for HangingTransport {
    async fn get(
        &self,
        _request: &FetchRequest,
        timeout: Duration,
    ) -> Result<RawResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(timeout).await;
        Err(TransportError::Timeout(timeout.as_millis() as u64))
    }
}

pub fn response(status: u16, body: &str) -> Result<RawResponse, TransportError> {
    Ok(RawResponse {
        status,
        status_text: None,
        headers: BTreeMap::new(),
        body: body.to_string(),
    })
}

pub fn refused() -> Result<RawResponse, TransportError> {
    Err(TransportError::Connection("Connection refused".to_string()))
}

/// A local address with nothing listening on it
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/items", port)
}

/// Local server that sends a 200 status line and headers, then stalls the
/// body. Returns the base URL and the number of accepted connections.
pub async fn stalled_body_server() -> (String, Arc<AtomicU32>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let connections = Arc::new(AtomicU32::new(0));

    let counter = Arc::clone(&connections);
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            counter.fetch_add(1, Ordering::SeqCst);
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let _ = socket
                    .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\n[")
                    .await;
                let _ = socket.flush().await;
                tokio::time::sleep(Duration::from_secs(30)).await;
            });
        }
    });

    (format!("http://{}/items", addr), connections)
}
