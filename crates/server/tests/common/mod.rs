//! # Common Test Utilities
//!
//! `TestApp` spawns the real router on a random port. The AI provider is the
//! OpenAI-compatible one, pointed at an `httpmock::MockServer`, and the database
//! is a freshly seeded sample database in a temporary directory.

// Not every test file uses every helper.
#![allow(unused)]

use anyhow::Result;
use axum::serve;
use httpmock::{Method::POST, Mock, MockServer};
use reqwest::Client;
use serde_json::json;
use std::{fs, net::SocketAddr, path::PathBuf};
use tempfile::{tempdir, TempDir};
use text2sql_server::{
    config::get_config,
    router::create_router,
    state::{build_app_state, AppState},
};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    pub db_path: PathBuf,
    pub app_state: AppState,
    _dir: TempDir,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the server with the default (read-only) settings.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with_extra_config("").await
    }

    /// Spawns the server with additional top-level YAML appended to the test config.
    pub async fn spawn_with_extra_config(extra_yaml: &str) -> Result<Self> {
        dotenvy::dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start_async().await;
        let dir = tempdir()?;
        let db_path = dir.path().join("data").join("chinook.db");
        let config_path = dir.path().join("config.yml");

        let config_content = format!(
            r#"
port: 0
database_path: "{}"
seed_sample_data: true
ai:
  provider: "local"
  api_url: "{}"
  model_name: "mock-chat-model"
  timeout_secs: 5
{extra_yaml}
"#,
            db_path.display(),
            mock_server.url(CHAT_COMPLETIONS_PATH),
        );
        fs::write(&config_path, config_content)?;

        let config_path = config_path
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("temp path is not valid UTF-8"))?;
        let config = get_config(Some(config_path))?;
        let app_state = build_app_state(config).await?;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let router_state = app_state.clone();
        let server_handle = tokio::spawn(async move {
            let app = create_router(router_state);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            db_path,
            app_state,
            _dir: dir,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Makes the mock model answer every chat completion with `content`.
    pub async fn mock_ai_reply(&self, content: &str) -> Mock<'_> {
        let body = json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        });
        self.mock_server
            .mock_async(|when, then| {
                when.method(POST).path(CHAT_COMPLETIONS_PATH);
                then.status(200).json_body(body);
            })
            .await
    }

    /// Posts `body` to `/query` as JSON.
    pub async fn ask(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/query", self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request to /query")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
