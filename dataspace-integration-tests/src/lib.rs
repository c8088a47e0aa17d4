//! Helpers for running the backend inside a test process.

use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpResponse, HttpServer};
use dataspace_api_client::DataspaceApiClient;
use dataspace_common::credentials::StaticCredentials;
use dataspace_remote_server::api::{run_server, ServerConfig};
use dataspace_remote_system_workspace::RemoteSystemWorkspaceManager;
use tokio::runtime::{Builder, Runtime};

pub const TOKEN: &str = "test-token";
pub const USER_EMAIL: &str = "a@b.com";

fn runtime() -> Runtime {
    Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("failed to build runtime")
}

/// Starts the backend on `port`; it stops when the runtime is dropped.
pub fn start_server(port: u16, workspace_manager: RemoteSystemWorkspaceManager) -> Runtime {
    let runtime = runtime();
    let config = ServerConfig {
        port,
        token: TOKEN.to_string(),
        workspace_manager,
    };
    runtime.spawn(async move {
        if let Err(e) = run_server(config).await {
            panic!("server failed: {}", e);
        }
    });
    std::thread::sleep(Duration::from_secs(1));
    runtime
}

/// Starts a server that answers 500 to everything.
pub fn start_failing_server(port: u16) -> Runtime {
    let runtime = runtime();
    runtime.spawn(async move {
        let server = HttpServer::new(|| {
            App::new().default_service(web::to(|| async {
                HttpResponse::InternalServerError().finish()
            }))
        })
        .bind(("127.0.0.1", port))
        .expect("failed to bind");
        if let Err(e) = server.run().await {
            panic!("server failed: {}", e);
        }
    });
    std::thread::sleep(Duration::from_secs(1));
    runtime
}

pub fn client(port: u16, token: &str) -> DataspaceApiClient {
    DataspaceApiClient::new(
        format!("http://localhost:{}", port),
        Arc::new(StaticCredentials::new(token)),
    )
}
