use dataspace_common::credentials::DEFAULT_TOKEN_ENV;
use dataspace_remote_server::api::{run_server, ServerConfig};
use dataspace_remote_system_workspace::RemoteSystemWorkspaceManager;

const DEFAULT_PORT: u16 = 8512;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let port = std::env::var("DATASPACE_PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let token = std::env::var(DEFAULT_TOKEN_ENV).unwrap_or_else(|_| {
        log::warn!("{} is not set, accepting the empty token", DEFAULT_TOKEN_ENV);
        String::new()
    });
    let config = ServerConfig {
        port,
        token,
        workspace_manager: RemoteSystemWorkspaceManager::new(),
    };
    run_server(config).await
}
