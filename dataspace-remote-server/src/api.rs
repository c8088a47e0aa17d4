use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use dataspace_remote_system_workspace::RemoteSystemWorkspaceManager;

use crate::state::ApiState;

use self::cleaned_folder::cleaned_folder_delete;
use self::cleaned_workspace::cleaned_workspace_delete;
use self::file::file_delete;
use self::folder::{folder_create, folder_delete};
use self::workspace::{workspace_create, workspace_delete, workspace_list};

pub mod cleaned_folder;
pub mod cleaned_workspace;
pub mod file;
pub mod folder;
pub mod workspace;

pub struct ServerConfig {
    pub port: u16,
    pub token: String,
    pub workspace_manager: RemoteSystemWorkspaceManager,
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(workspace_list)
        .service(workspace_create)
        .service(workspace_delete)
        .service(folder_create)
        .service(folder_delete)
        .service(file_delete)
        .service(cleaned_folder_delete)
        .service(cleaned_workspace_delete);
}

pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let state = ApiState::new(config.workspace_manager.clone(), config.token.clone());

    log::info!("listening on 0.0.0.0:{}", config.port);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(web::Data::new(state.clone()))
            .configure(routes)
    })
    .bind(("0.0.0.0", config.port))?
    .run();
    server.await
}
