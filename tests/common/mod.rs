#![allow(dead_code)]

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use league_assets::download::Manager;
use reqwest::Client;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    time::sleep,
};

#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl Route {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::from("{}"),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Debug, Default)]
struct Counters {
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    requests: AtomicUsize,
}

/// Minimal HTTP/1.1 server answering GETs from a fixed route table.
pub struct MockServer {
    addr: SocketAddr,
    counters: Arc<Counters>,
}

impl MockServer {
    pub async fn start(routes: HashMap<String, Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let counters = Arc::new(Counters::default());
        let routes = Arc::new(routes);

        let server_counters = counters.clone();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let routes = routes.clone();
                let counters = server_counters.clone();
                tokio::spawn(async move {
                    let _ = serve(stream, &routes, &counters).await;
                });
            }
        });

        Self { addr, counters }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Highest number of requests seen in flight at the same time.
    pub fn peak(&self) -> usize {
        self.counters.peak.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> usize {
        self.counters.requests.load(Ordering::SeqCst)
    }
}

async fn serve(
    mut stream: TcpStream,
    routes: &HashMap<String, Route>,
    counters: &Counters,
) -> std::io::Result<()> {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf).await?;
        if n == 0 {
            return Ok(());
        }
        request.extend_from_slice(&buf[..n]);
    }
    let request = String::from_utf8_lossy(&request);
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_owned();

    counters.requests.fetch_add(1, Ordering::SeqCst);
    let now = counters.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
    counters.peak.fetch_max(now, Ordering::SeqCst);

    let route = routes.get(&path).cloned().unwrap_or(Route::status(404));
    sleep(route.delay).await;
    let reason = match route.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        route.status,
        reason,
        route.body.len(),
        route.body
    );
    let written = stream.write_all(response.as_bytes()).await;
    counters.in_flight.fetch_sub(1, Ordering::SeqCst);
    written?;
    stream.shutdown().await
}

pub fn manager(concurrency: usize, timeout: Duration) -> Manager {
    let client = Client::builder()
        .no_proxy()
        .timeout(timeout)
        .build()
        .unwrap();
    Manager::new(client, concurrency)
}
