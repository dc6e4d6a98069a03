#![allow(dead_code)]

use anyhow::{Context, Result};
use tokio::task::JoinHandle;

use propertyhub::config::AppConfig;
use propertyhub::server::{app, AppState};

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Development config with request logging off
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::development();
    config.api.enable_request_logging = false;
    config
}

pub async fn spawn_server() -> Result<TestServer> {
    spawn_with(test_config()).await
}

/// Serve the router on an unused port for the lifetime of the returned handle
pub async fn spawn_with(config: AppConfig) -> Result<TestServer> {
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let base_url = format!("http://127.0.0.1:{}", port);

    let state = AppState::from_config(&config).context("failed to build app state")?;
    let router = app(state, &config);

    // Bound before returning, so the server accepts connections immediately
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .with_context(|| format!("failed to bind port {}", port))?;

    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok(TestServer { port, base_url, handle })
}

pub fn header<'a>(res: &'a reqwest::Response, name: &str) -> Option<&'a str> {
    res.headers().get(name).and_then(|v| v.to_str().ok())
}
